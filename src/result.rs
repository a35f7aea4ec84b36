use crate::headers::Headers;

/// Headers for a preflight short-circuit. Terminal: the host answers with
/// `status` and an empty body instead of routing further, taking priority
/// over any catch-all handler.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers to merge into the downstream response of a non-preflight request.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
}
