//! Connectivity and new-version detection
//!
//! The monitor polls the API's health endpoint. A successful response means the
//! client is online; a reported version that differs from ours means a newer build
//! has been deployed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    core::raw_msg::RawMsg,
    infrastructure::product_source::{parse_base_url, FetchError},
};

/// What a successful health probe reported
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProbeStatus {
    #[serde(default)]
    pub version: Option<String>,
}

#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn probe(&self) -> Result<ProbeStatus, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpStatusProbe {
    url: Url,
    http: reqwest::Client,
}

impl HttpStatusProbe {
    pub fn new(base_url: &str, health_path: &str, timeout: Duration) -> Result<Self, FetchError> {
        let url = parse_base_url(base_url)?.join(health_path.trim_start_matches('/'))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url, http })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl StatusProbe for HttpStatusProbe {
    async fn probe(&self) -> Result<ProbeStatus, FetchError> {
        let response = self.http.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        // Any 2xx counts as online, whether or not the body carries a version
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

/// Background task turning probe results into raw connectivity messages.
/// Only changes are reported; a new version is reported once.
pub struct ConnectivityMonitor {
    probe: Arc<dyn StatusProbe>,
    interval: Duration,
    current_version: String,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    cancel_token: CancellationToken,
    last_online: Option<bool>,
    announced_version: Option<String>,
}

impl ConnectivityMonitor {
    pub fn new(
        probe: Arc<dyn StatusProbe>,
        interval: Duration,
        current_version: impl Into<String>,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> (CancellationToken, Self) {
        let cancel_token = CancellationToken::new();
        (
            cancel_token.clone(),
            Self {
                probe,
                interval,
                current_version: current_version.into(),
                raw_tx,
                cancel_token,
                last_online: None,
                announced_version: None,
            },
        )
    }

    /// Run the monitor in a background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.cancel_token.cancelled() => {
                        log::debug!("Connectivity monitor stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        if !self.check_once().await {
                            break;
                        }
                    }
                }
            }
        });
    }

    /// Probes once and reports what changed. Returns false when nobody is listening.
    pub async fn check_once(&mut self) -> bool {
        let result = self.probe.probe().await;
        let online = result.is_ok();
        if let Err(e) = &result {
            log::debug!("Health probe failed: {e}");
        }

        if self.last_online != Some(online) {
            log::info!("Connectivity changed: {}", if online { "online" } else { "offline" });
            self.last_online = Some(online);
            if self.raw_tx.send(RawMsg::ConnectivityChanged(online)).is_err() {
                return false;
            }
        }

        if let Ok(ProbeStatus {
            version: Some(version),
        }) = result
        {
            let is_new = version != self.current_version
                && self.announced_version.as_deref() != Some(version.as_str());
            if is_new {
                log::info!("New version available: {version}");
                self.announced_version = Some(version.clone());
                if self.raw_tx.send(RawMsg::NewVersion(version)).is_err() {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    struct ScriptedProbe {
        replies: Mutex<VecDeque<Result<ProbeStatus, FetchError>>>,
    }

    impl ScriptedProbe {
        fn new(replies: Vec<Result<ProbeStatus, FetchError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
            })
        }
    }

    #[async_trait]
    impl StatusProbe for ScriptedProbe {
        async fn probe(&self) -> Result<ProbeStatus, FetchError> {
            self.replies
                .lock()
                .ok()
                .and_then(|mut r| r.pop_front())
                .unwrap_or_else(|| Ok(ProbeStatus::default()))
        }
    }

    fn down() -> Result<ProbeStatus, FetchError> {
        Err(FetchError::Status {
            status: 503,
            body: String::new(),
        })
    }

    fn up(version: Option<&str>) -> Result<ProbeStatus, FetchError> {
        Ok(ProbeStatus {
            version: version.map(str::to_string),
        })
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<RawMsg>) -> Vec<RawMsg> {
        let mut out = vec![];
        while let Ok(msg) = rx.try_recv() {
            out.push(msg);
        }
        out
    }

    #[tokio::test]
    async fn test_reports_only_changes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let probe = ScriptedProbe::new(vec![up(None), up(None), down(), down(), up(None)]);
        let (_token, mut monitor) =
            ConnectivityMonitor::new(probe, Duration::from_secs(1), "1.0.0", tx);

        for _ in 0..5 {
            assert!(monitor.check_once().await);
        }

        assert_eq!(
            drain(&mut rx),
            vec![
                RawMsg::ConnectivityChanged(true),
                RawMsg::ConnectivityChanged(false),
                RawMsg::ConnectivityChanged(true),
            ]
        );
    }

    #[tokio::test]
    async fn test_new_version_announced_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let probe = ScriptedProbe::new(vec![
            up(Some("1.0.0")),
            up(Some("1.1.0")),
            up(Some("1.1.0")),
        ]);
        let (_token, mut monitor) =
            ConnectivityMonitor::new(probe, Duration::from_secs(1), "1.0.0", tx);

        for _ in 0..3 {
            monitor.check_once().await;
        }

        assert_eq!(
            drain(&mut rx),
            vec![
                RawMsg::ConnectivityChanged(true),
                RawMsg::NewVersion("1.1.0".to_string()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_polling() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let probe = ScriptedProbe::new(vec![down()]);
        let (token, monitor) =
            ConnectivityMonitor::new(probe, Duration::from_secs(5), "1.0.0", tx);
        monitor.run();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(rx.recv().await, Some(RawMsg::ConnectivityChanged(false)));

        token.cancel();
        // The task ends and drops its sender
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_probe_url_joins_health_path() {
        let probe = HttpStatusProbe::new("http://localhost:3000", "/health", Duration::from_secs(1))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(probe.url().as_str(), "http://localhost:3000/health");
    }
}
