//! Module lifecycle state machine.
//!
//! Every dashboard module owns one request/response lifecycle:
//! `Idle → Loading → {Success, Error} → Loading → …`. The state is an
//! explicit value type driven by transition methods, so the whole machine is
//! unit-testable without rendering anything.
//!
//! Dispatches are tagged with a monotonic [`RequestToken`]. A resolution
//! carrying anything but the latest token is dropped, so when two requests
//! overlap, the last one *dispatched* wins — not the last one to resolve.

/// The state-machine position, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Tagged lifecycle state. Success data and an error message cannot coexist
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// Tags one dispatch. Tokens are only meaningful against the lifecycle that
/// issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw sequence number, usable as a per-request RNG sequence.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One module's request/response lifecycle.
#[derive(Debug)]
pub struct Lifecycle<T> {
    state: ModuleState<T>,
    seq: u64,
}

impl<T> Lifecycle<T> {
    pub fn new() -> Self {
        Self {
            state: ModuleState::Idle,
            seq: 0,
        }
    }

    /// Start life in `Success` with a pre-loaded value (the quote module
    /// shows a default before any interaction).
    pub fn with_initial(value: T) -> Self {
        Self {
            state: ModuleState::Success(value),
            seq: 0,
        }
    }

    /// Begin a new request. Valid in any state: clears prior data and error,
    /// enters `Loading`, and returns the token the eventual resolution must
    /// present.
    pub fn begin(&mut self) -> RequestToken {
        self.seq += 1;
        self.state = ModuleState::Loading;
        RequestToken(self.seq)
    }

    /// Complete the request tagged `token` successfully. Returns whether the
    /// transition applied; a stale token leaves the state untouched.
    pub fn resolve(&mut self, token: RequestToken, value: T) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.state = ModuleState::Success(value);
        true
    }

    /// Fail the request tagged `token`. Same staleness rule as [`resolve`].
    ///
    /// [`resolve`]: Lifecycle::resolve
    pub fn reject(&mut self, token: RequestToken, message: impl Into<String>) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.state = ModuleState::Error(message.into());
        true
    }

    fn accepts(&self, token: RequestToken) -> bool {
        token.0 == self.seq && matches!(self.state, ModuleState::Loading)
    }

    pub fn state(&self) -> &ModuleState<T> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            ModuleState::Idle => Phase::Idle,
            ModuleState::Loading => Phase::Loading,
            ModuleState::Success(_) => Phase::Success,
            ModuleState::Error(_) => Phase::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ModuleState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ModuleState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ModuleState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for Lifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let lc: Lifecycle<u32> = Lifecycle::new();
        assert_eq!(lc.phase(), Phase::Idle);
        assert!(lc.data().is_none());
        assert!(lc.error_message().is_none());
    }

    #[test]
    fn with_initial_starts_in_success() {
        let lc = Lifecycle::with_initial(7u32);
        assert_eq!(lc.phase(), Phase::Success);
        assert_eq!(lc.data(), Some(&7));
    }

    #[test]
    fn begin_clears_prior_data_and_error() {
        let mut lc = Lifecycle::new();
        let t = lc.begin();
        assert!(lc.resolve(t, 1u32));
        assert_eq!(lc.data(), Some(&1));

        lc.begin();
        assert_eq!(lc.phase(), Phase::Loading);
        assert!(lc.data().is_none());
        assert!(lc.error_message().is_none());
    }

    #[test]
    fn resolve_sets_data_and_no_error() {
        let mut lc = Lifecycle::new();
        let t = lc.begin();
        assert!(lc.resolve(t, 42u32));
        assert_eq!(lc.phase(), Phase::Success);
        assert_eq!(lc.data(), Some(&42));
        assert!(lc.error_message().is_none());
    }

    #[test]
    fn reject_sets_error_and_no_data() {
        let mut lc: Lifecycle<u32> = Lifecycle::new();
        let t = lc.begin();
        assert!(lc.reject(t, "boom"));
        assert_eq!(lc.phase(), Phase::Error);
        assert!(lc.data().is_none());
        assert_eq!(lc.error_message(), Some("boom"));
    }

    #[test]
    fn stale_resolution_is_dropped() {
        let mut lc = Lifecycle::new();
        let first = lc.begin();
        let second = lc.begin();

        // The first request resolves late: ignored.
        assert!(!lc.resolve(first, 1u32));
        assert_eq!(lc.phase(), Phase::Loading);

        // The current request lands normally.
        assert!(lc.resolve(second, 2u32));
        assert_eq!(lc.data(), Some(&2));
    }

    #[test]
    fn stale_rejection_is_dropped() {
        let mut lc = Lifecycle::new();
        let first = lc.begin();
        let second = lc.begin();

        assert!(!lc.reject(first, "late failure"));
        assert!(lc.resolve(second, 9u32));
        assert_eq!(lc.data(), Some(&9));
        assert!(lc.error_message().is_none());
    }

    #[test]
    fn double_resolution_of_same_token_is_dropped() {
        let mut lc = Lifecycle::new();
        let t = lc.begin();
        assert!(lc.resolve(t, 1u32));
        // Same token again: the lifecycle already left Loading.
        assert!(!lc.resolve(t, 2u32));
        assert_eq!(lc.data(), Some(&1));
    }

    #[test]
    fn begin_is_valid_in_error_state() {
        let mut lc: Lifecycle<u32> = Lifecycle::new();
        let t = lc.begin();
        lc.reject(t, "first attempt failed");

        let t2 = lc.begin();
        assert!(lc.resolve(t2, 3u32));
        assert_eq!(lc.phase(), Phase::Success);
    }
}
