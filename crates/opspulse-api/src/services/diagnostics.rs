// Connectivity probe harness
//
// Fires concurrent GET probes at configured upstream endpoints. Probes
// are the only place in the backend with a timeout; a failing probe is
// data, not an error.

use futures::future::join_all;
use serde::Serialize;
use std::time::{Duration, Instant};
use utoipa::ToSchema;

/// Per-probe abort threshold
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// One configured upstream endpoint
#[derive(Debug, Clone)]
pub struct ProbeTarget {
    pub name: String,
    pub url: String,
}

/// Outcome of one probe
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProbeResult {
    pub name: String,
    pub url: String,
    /// "ok" or "failed"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Split a "name=url,name=url" list; malformed pairs are skipped
fn parse_targets(raw: &str) -> Vec<ProbeTarget> {
    raw.split(',')
        .filter_map(|pair| {
            let (name, url) = pair.trim().split_once('=')?;
            Some(ProbeTarget {
                name: name.to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}

pub struct DiagnosticsService {
    client: reqwest::Client,
    targets: Vec<ProbeTarget>,
}

impl DiagnosticsService {
    pub fn new(targets: Vec<ProbeTarget>) -> Self {
        Self {
            client: reqwest::Client::new(),
            targets,
        }
    }

    /// Parse DIAGNOSTIC_PROBES ("name=url,name=url"); unset means no probes
    pub fn from_env() -> Self {
        let targets = std::env::var("DIAGNOSTIC_PROBES")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| parse_targets(&s))
            .unwrap_or_default();

        Self::new(targets)
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Run every probe concurrently
    pub async fn run(&self) -> Vec<ProbeResult> {
        join_all(self.targets.iter().map(|t| self.probe(t))).await
    }

    async fn probe(&self, target: &ProbeTarget) -> ProbeResult {
        let started = Instant::now();
        let outcome = self
            .client
            .get(&target.url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;
        let latency_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(response) => {
                let code = response.status();
                ProbeResult {
                    name: target.name.clone(),
                    url: target.url.clone(),
                    status: if code.is_success() { "ok" } else { "failed" }.to_string(),
                    http_status: Some(code.as_u16()),
                    latency_ms,
                    error: None,
                }
            }
            Err(e) => ProbeResult {
                name: target.name.clone(),
                url: target.url.clone(),
                status: "failed".to_string(),
                http_status: None,
                latency_ms,
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_probes_report_ok_and_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/up"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/down"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let service = DiagnosticsService::new(vec![
            ProbeTarget {
                name: "up".to_string(),
                url: format!("{}/up", server.uri()),
            },
            ProbeTarget {
                name: "down".to_string(),
                url: format!("{}/down", server.uri()),
            },
        ]);

        let results = service.run().await;
        assert_eq!(results.len(), 2);

        let up = results.iter().find(|r| r.name == "up").unwrap();
        assert_eq!(up.status, "ok");
        assert_eq!(up.http_status, Some(200));

        let down = results.iter().find(|r| r.name == "down").unwrap();
        assert_eq!(down.status, "failed");
        assert_eq!(down.http_status, Some(500));
    }

    #[tokio::test]
    async fn test_unreachable_target_is_failed_not_error() {
        // Port 9 is discard; nothing listens there in CI.
        let service = DiagnosticsService::new(vec![ProbeTarget {
            name: "dead".to_string(),
            url: "http://127.0.0.1:9/".to_string(),
        }]);

        let results = service.run().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, "failed");
        assert!(results[0].error.is_some());
    }

    #[test]
    fn test_parse_targets_skips_malformed_pairs() {
        let targets =
            parse_targets("up=http://a.example/health, nonsense, billing=http://b.example/ping");
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].name, "up");
        assert_eq!(targets[1].name, "billing");
        assert_eq!(targets[1].url, "http://b.example/ping");
    }
}
