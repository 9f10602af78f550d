use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

/// The one ticking resource in the service. The tick task runs only
/// between `start` and `stop`; nothing else updates the displayed time.
pub struct ServerClock {
    started_at: DateTime<Utc>,
    current: Arc<Mutex<DateTime<Utc>>>,
    task: Mutex<Option<JoinHandle<()>>>,
    period: Duration,
}

impl ServerClock {
    pub fn new() -> Self {
        Self::with_period(Duration::from_secs(1))
    }

    pub fn with_period(period: Duration) -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            current: Arc::new(Mutex::new(now)),
            task: Mutex::new(None),
            period,
        }
    }

    pub fn start(&self) {
        let mut task = self.task.lock().unwrap();
        if task.is_some() {
            return;
        }
        let current = Arc::clone(&self.current);
        let period = self.period;
        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                *current.lock().unwrap() = Utc::now();
            }
        }));
    }

    pub fn stop(&self) {
        if let Some(task) = self.task.lock().unwrap().take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.lock().unwrap().is_some()
    }

    /// Last observed tick; frozen while stopped.
    pub fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap()
    }

    pub fn uptime_seconds(&self) -> i64 {
        (self.now() - self.started_at).num_seconds()
    }
}

impl Drop for ServerClock {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ticks_only_while_started() {
        let clock = ServerClock::with_period(Duration::from_millis(5));
        let before = clock.now();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(clock.now(), before, "clock must not tick before start");

        clock.start();
        assert!(clock.is_running());
        tokio::time::sleep(Duration::from_millis(50)).await;
        let running = clock.now();
        assert!(running > before, "clock should advance once started");

        clock.stop();
        assert!(!clock.is_running());
        let frozen = clock.now();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(clock.now(), frozen, "clock must freeze after stop");
    }

    #[tokio::test]
    async fn start_twice_is_idempotent() {
        let clock = ServerClock::with_period(Duration::from_millis(5));
        clock.start();
        clock.start();
        assert!(clock.is_running());
        clock.stop();
        assert!(!clock.is_running());
    }
}
