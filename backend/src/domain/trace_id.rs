//! Request-scoped trace identifier.
//!
//! The tracing middleware puts a `TraceId` in task-local storage for the
//! duration of a request so errors and log lines can pick it up without
//! threading it through every call. Task-locals are not inherited by spawned
//! tasks; wrap the spawned future in [`TraceId::scope`] to carry it across.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static TRACE_ID: TraceId;
}

/// Per-request correlation identifier.
///
/// # Examples
/// ```
/// use donor_registry::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
///     .parse()
///     .expect("valid UUID");
/// let observed = TraceId::scope(trace_id, async { TraceId::current() }).await;
/// assert_eq!(observed, Some(trace_id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a new random trace identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Accept a client-supplied header value when it is a well-formed UUID.
    ///
    /// Anything else is discarded so callers fall back to [`TraceId::generate`].
    #[must_use]
    pub fn from_header_value(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }

    /// Returns the current trace identifier if one is in scope.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn current_reflects_scope() {
        let expected = TraceId::generate();
        let observed = TraceId::scope(expected, async move { TraceId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn current_is_none_out_of_scope() {
        assert!(TraceId::current().is_none());
    }

    #[rstest]
    #[case("6f1c8c1e-7d3b-4c55-9d7e-0d0f6b3f9a10", true)]
    #[case("  6f1c8c1e-7d3b-4c55-9d7e-0d0f6b3f9a10  ", true)]
    #[case("not-a-uuid", false)]
    #[case("", false)]
    fn from_header_value_accepts_only_uuids(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(TraceId::from_header_value(raw).is_some(), accepted);
    }
}
