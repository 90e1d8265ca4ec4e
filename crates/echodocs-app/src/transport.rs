//! Echo request transport
//!
//! The harness state machine never touches the network directly; it goes
//! through this trait so handler logic can be exercised against stubs.
//! Errors are plain strings because the harness displays them verbatim.

use crate::echo::EchoOutcome;

/// HTTP transport for the echo harness.
///
/// Both calls resolve to an [`EchoOutcome`]: a `Response` for any HTTP
/// answer (whatever the status code) or a `TransportError` for failures
/// below the HTTP layer. No retries, no harness-level timeout -- the
/// transport's own defaults apply.
#[trait_variant::make(EchoTransport: Send)]
pub trait LocalEchoTransport {
    /// Issue a GET to `url` and report how it settled.
    async fn get(&self, url: &str) -> EchoOutcome;

    /// POST `body` to `url` with a JSON content type, whether or not the
    /// body actually parsed as JSON (best-effort normalization happens
    /// before this call).
    async fn post_json(&self, url: &str, body: String) -> EchoOutcome;
}

/// The real transport, backed by a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn read_response(response: reqwest::Response) -> EchoOutcome {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => EchoOutcome::Response { status, body },
            Err(e) => EchoOutcome::TransportError {
                error: e.to_string(),
            },
        }
    }
}

impl EchoTransport for HttpTransport {
    async fn get(&self, url: &str) -> EchoOutcome {
        match self.client.get(url).send().await {
            Ok(response) => Self::read_response(response).await,
            Err(e) => EchoOutcome::TransportError {
                error: e.to_string(),
            },
        }
    }

    async fn post_json(&self, url: &str, body: String) -> EchoOutcome {
        let request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body);
        match request.send().await {
            Ok(response) => Self::read_response(response).await,
            Err(e) => EchoOutcome::TransportError {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
pub(crate) mod stub {
    //! Canned transports for handler and harness tests.

    use super::*;

    /// Always answers with a fixed status and body.
    #[derive(Debug, Clone)]
    pub struct FixedResponse {
        pub status: u16,
        pub body: String,
    }

    impl EchoTransport for FixedResponse {
        async fn get(&self, _url: &str) -> EchoOutcome {
            EchoOutcome::Response {
                status: self.status,
                body: self.body.clone(),
            }
        }

        async fn post_json(&self, _url: &str, body: String) -> EchoOutcome {
            // Echo semantics: mirror the request body back.
            let _ = body;
            EchoOutcome::Response {
                status: self.status,
                body: self.body.clone(),
            }
        }
    }

    /// Always fails below the HTTP layer.
    #[derive(Debug, Clone)]
    pub struct AlwaysFails {
        pub error: String,
    }

    impl EchoTransport for AlwaysFails {
        async fn get(&self, _url: &str) -> EchoOutcome {
            EchoOutcome::TransportError {
                error: self.error.clone(),
            }
        }

        async fn post_json(&self, _url: &str, _body: String) -> EchoOutcome {
            EchoOutcome::TransportError {
                error: self.error.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stub::{AlwaysFails, FixedResponse};
    use super::*;
    use crate::echo::{EchoOutcome, EchoSlot};

    #[tokio::test]
    async fn test_stub_response_settles_slot_as_success() {
        let transport = FixedResponse {
            status: 200,
            body: "ok".to_string(),
        };
        let mut slot = EchoSlot::default();
        let generation = slot.begin();

        let outcome = EchoTransport::get(&transport, "http://stub/api/echo").await;
        slot.settle(generation, outcome);

        assert_eq!(slot.status, "status 200");
        assert_eq!(slot.response, "ok");
    }

    #[tokio::test]
    async fn test_stub_failure_settles_slot_as_failure() {
        let transport = AlwaysFails {
            error: "dns error".to_string(),
        };
        let mut slot = EchoSlot::default();
        let generation = slot.begin();

        let outcome =
            EchoTransport::post_json(&transport, "http://stub/api/echo", "{}".to_string()).await;
        slot.settle(generation, outcome);

        assert_eq!(slot.status, crate::echo::STATUS_FAILED);
        assert_eq!(slot.response, "dns error");
        assert_ne!(slot.status, "status 200");
    }

    #[tokio::test]
    async fn test_non_2xx_is_still_a_response() {
        let transport = FixedResponse {
            status: 404,
            body: "not found".to_string(),
        };
        match EchoTransport::get(&transport, "http://stub/missing").await {
            EchoOutcome::Response { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("expected response, got {other:?}"),
        }
    }
}
