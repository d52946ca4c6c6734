/// Classification of market data failures.
///
/// Used by the quote service and the transport layer to decide how an error
/// surfaces to callers.
///
/// # Behavior Summary
///
/// | Class | Reaches an adapter? | Surfaced as |
/// |-------|---------------------|-------------|
/// | `Validation` | No | Client error (HTTP 400) |
/// | `Upstream` | Yes | Degraded quote or empty series |
/// | `Arithmetic` | Yes | Degraded quote, same as `Upstream` |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureClass {
    /// The request itself is invalid (unknown symbol token).
    /// Checked before any provider is called.
    Validation,

    /// The upstream call failed: network error, timeout, non-2xx status,
    /// or a payload that could not be normalized.
    Upstream,

    /// The upstream payload was well formed but a derived value could not be
    /// computed (zero previous close for a percent change).
    Arithmetic,
}

impl FailureClass {
    /// Whether the failure is degraded in-band rather than reported to the client.
    pub fn is_degradable(self) -> bool {
        matches!(self, Self::Upstream | Self::Arithmetic)
    }
}
