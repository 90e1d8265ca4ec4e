//! Echo harness state machine
//!
//! Two independent request/response slots (GET and POST) back the live
//! harness blocks. Each slot walks Idle → Sending → Settled; any HTTP
//! response settles as success regardless of status code, and only
//! transport-level failures settle as failure.
//!
//! The original viewer let a second in-flight request race the first, with
//! last-to-settle winning. Here every `begin()` bumps a generation counter
//! and completions carrying a stale generation are discarded, so the slot
//! always shows the outcome of the most recently triggered request.

/// Path appended to the endpoint base for both harness requests.
pub const ECHO_PATH: &str = "/api/echo";

/// Status text while a request is in flight.
pub const STATUS_SENDING: &str = "sending…";

/// Status text after a transport-level failure.
pub const STATUS_FAILED: &str = "request failed";

/// Default POST input, matching the placeholder the harness shows.
pub const DEFAULT_POST_INPUT: &str = r#"{"msg":"hello"}"#;

/// Which harness a message or action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoKind {
    Get,
    Post,
}

/// Where a slot is in its request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Sending,
    Settled,
}

/// Outcome of one echo request, as reported by the transport task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoOutcome {
    /// The server answered. Any status code counts as transport success.
    Response { status: u16, body: String },
    /// The request never produced an HTTP response (DNS, refused, timeout).
    TransportError { error: String },
}

/// One request/response slot of the harness.
#[derive(Debug, Clone, Default)]
pub struct EchoSlot {
    pub phase: RequestPhase,
    /// Human-readable status line: empty, "sending…", "status <code>",
    /// or "request failed".
    pub status: String,
    /// Raw response body, or the stringified transport error.
    pub response: String,
    generation: u64,
}

impl EchoSlot {
    /// Start a new request: clear the previous response, show the sending
    /// indicator, and return the generation the completion must carry.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = RequestPhase::Sending;
        self.status = STATUS_SENDING.to_string();
        self.response.clear();
        self.generation
    }

    /// Record a completion. Returns `false` (and changes nothing) when the
    /// completion belongs to a superseded request.
    pub fn settle(&mut self, generation: u64, outcome: EchoOutcome) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = RequestPhase::Settled;
        match outcome {
            EchoOutcome::Response { status, body } => {
                self.status = format!("status {status}");
                self.response = body;
            }
            EchoOutcome::TransportError { error } => {
                self.status = STATUS_FAILED.to_string();
                self.response = error;
            }
        }
        true
    }

    pub fn is_sending(&self) -> bool {
        self.phase == RequestPhase::Sending
    }
}

/// Both slots plus the editable POST input.
#[derive(Debug, Clone)]
pub struct EchoHarness {
    pub get: EchoSlot,
    pub post: EchoSlot,
    pub post_input: String,
}

impl Default for EchoHarness {
    fn default() -> Self {
        Self {
            get: EchoSlot::default(),
            post: EchoSlot::default(),
            post_input: DEFAULT_POST_INPUT.to_string(),
        }
    }
}

impl EchoHarness {
    pub fn slot(&self, kind: EchoKind) -> &EchoSlot {
        match kind {
            EchoKind::Get => &self.get,
            EchoKind::Post => &self.post,
        }
    }

    pub fn slot_mut(&mut self, kind: EchoKind) -> &mut EchoSlot {
        match kind {
            EchoKind::Get => &mut self.get,
            EchoKind::Post => &mut self.post,
        }
    }
}

/// Best-effort normalization of the POST input.
///
/// Valid JSON is re-serialized compactly; anything else is sent verbatim.
/// Invalid JSON is not an error -- the echo server is happy to mirror
/// whatever it receives, and the Content-Type header stays JSON either way.
pub fn normalize_post_body(input: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(value) => value.to_string(),
        Err(_) => input.to_string(),
    }
}
