//! Request lifecycle state
//!
//! UI layers track every remote call with one [`RequestState`] value instead
//! of separate loading/error/data variables, so impossible combinations
//! (loaded data alongside a stale error, a spinner over old results) cannot
//! be represented.

use crate::error::NewsError;

/// Lifecycle of a single remote request
///
/// Starts at `Idle`, moves to `Loading` when the call is issued, and settles
/// in exactly one of `Success` or `Failure`. Re-issuing the call moves a
/// settled state back to `Loading`, dropping the previous outcome.
///
/// # Examples
///
/// ```
/// use gamenews_rs::RequestState;
///
/// let mut state: RequestState<Vec<String>> = RequestState::Idle;
/// state = RequestState::Loading;
/// state = RequestState::from(Ok(vec!["a1".to_string()]));
/// assert!(state.is_success());
/// assert_eq!(state.value().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T, E = NewsError> {
    /// No request issued yet
    Idle,
    /// Request in flight, no outcome yet
    Loading,
    /// Request finished with a value
    Success(T),
    /// Request finished with an error
    Failure(E),
}

impl<T, E> RequestState<T, E> {
    /// True while a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once a request finished with a value
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True once a request finished with an error
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// True when the request has finished, either way
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    /// The success value, if settled successfully
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The error, if settled unsuccessfully
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Take the success value out, leaving `Idle` behind
    pub fn take_value(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Idle) {
            Self::Success(value) => Some(value),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Map the success value, preserving the other variants
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> RequestState<U, E> {
        match self {
            Self::Idle => RequestState::Idle,
            Self::Loading => RequestState::Loading,
            Self::Success(value) => RequestState::Success(f(value)),
            Self::Failure(error) => RequestState::Failure(error),
        }
    }
}

// Derived Default would demand T: Default and E: Default; Idle needs neither
impl<T, E> Default for RequestState<T, E> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T, E> From<std::result::Result<T, E>> for RequestState<T, E> {
    /// Settle a state directly from a finished call
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}
