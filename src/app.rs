use std::sync::Arc;

use tracing::info;

use crate::infrastructure::config::PortalConfig;
use crate::infrastructure::dataset::ReferenceData;
use crate::infrastructure::supabase::sink_from_config;
use crate::interfaces::http::{start_server, HttpState};

pub async fn run() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = PortalConfig::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let data = Arc::new(ReferenceData::seeded());
    let sink = sink_from_config(&config);
    let state = Arc::new(HttpState::new(data, sink, &config));

    let server = start_server(Arc::clone(&state), &config)?;
    info!(
        address = %config.bind_address,
        port = config.port,
        "Portal service listening"
    );

    let result = server.await;
    state.clock.stop();
    result
}
