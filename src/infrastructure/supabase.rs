use async_trait::async_trait;

use crate::domain::complaint::ComplaintRecord;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::PortalConfig;

/// Where accepted complaints go. The production impl writes to the hosted
/// backend; tests substitute an in-memory double.
#[async_trait]
pub trait ComplaintSink: Send + Sync {
    async fn insert(&self, record: &ComplaintRecord) -> Result<()>;
}

/// Single-insert client for the hosted `complaints` table. No retry, no
/// dedup: one POST, one success-or-error answer.
pub struct SupabaseSink {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseSink {
    pub fn from_config(config: &PortalConfig) -> Result<Self> {
        if config.supabase_url.is_empty() {
            return Err(AppError::ConfigError(
                "PMAJAY_SUPABASE_URL is not set".to_string(),
            ));
        }
        if config.supabase_anon_key.is_empty() {
            return Err(AppError::ConfigError(
                "PMAJAY_SUPABASE_ANON_KEY is not set".to_string(),
            ));
        }
        url::Url::parse(&config.supabase_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid supabase URL: {}", e)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/complaints", self.base_url)
    }
}

#[async_trait]
impl ComplaintSink for SupabaseSink {
    async fn insert(&self, record: &ComplaintRecord) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::SubmissionError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::SubmissionError(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        Ok(())
    }
}

/// Stands in when the hosted backend is not configured. Every insert fails
/// exactly like a network error, so the rest of the service behaves the
/// same either way.
pub struct UnconfiguredSink;

#[async_trait]
impl ComplaintSink for UnconfiguredSink {
    async fn insert(&self, _record: &ComplaintRecord) -> Result<()> {
        Err(AppError::SubmissionError(
            "Complaint backend is not configured".to_string(),
        ))
    }
}

/// Builds the production sink, falling back to the unconfigured stand-in
/// when the endpoint or key is missing.
pub fn sink_from_config(config: &PortalConfig) -> std::sync::Arc<dyn ComplaintSink> {
    match SupabaseSink::from_config(config) {
        Ok(sink) => std::sync::Arc::new(sink),
        Err(err) => {
            tracing::warn!(error = %err, "Complaint sink disabled");
            std::sync::Arc::new(UnconfiguredSink)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, key: &str) -> PortalConfig {
        PortalConfig {
            supabase_url: url.to_string(),
            supabase_anon_key: key.to_string(),
            ..PortalConfig::default()
        }
    }

    #[test]
    fn rejects_missing_endpoint() {
        assert!(SupabaseSink::from_config(&config("", "key")).is_err());
        assert!(SupabaseSink::from_config(&config("https://x.supabase.co", "")).is_err());
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        assert!(SupabaseSink::from_config(&config("not a url", "key")).is_err());
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let sink = SupabaseSink::from_config(&config("https://x.supabase.co/", "key")).unwrap();
        assert_eq!(sink.endpoint(), "https://x.supabase.co/rest/v1/complaints");
    }
}
