//! Handling of non-contributory shared secrets
//!
//! A peer public key of small order (or the zero coordinate) drives the
//! ladder to the point at infinity, and the shared secret comes out as all
//! zero bytes. RFC 7748 leaves it to the protocol whether to abort.

/// What the engine does with an all-zero shared secret
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LowOrderPolicy {
    /// Return the all-zero secret like any other
    #[default]
    Allow,
    /// Fail with `Error::NonContributory`
    RejectNonContributory,
}

impl LowOrderPolicy {
    /// Whether all-zero secrets are rejected
    pub fn rejects_non_contributory(self) -> bool {
        matches!(self, LowOrderPolicy::RejectNonContributory)
    }
}
