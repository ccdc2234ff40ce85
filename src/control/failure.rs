//! Failure descriptions for the fallible-call adapter.
//!
//! A [`Failure`] is what an `Err` carries when a computation terminated
//! abnormally (a panic) or returned a standard library error through the
//! adapter. It keeps the category of the failure next to its description,
//! so callers can tell a caught panic from an ordinary error value.

use std::any::Any;
use std::fmt;

/// The category of a captured [`Failure`].
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::{Failure, FailureKind};
///
/// assert_eq!(Failure::panic("boom").kind(), FailureKind::Panic);
/// assert_eq!(Failure::error("io").kind(), FailureKind::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureKind {
    /// The computation panicked.
    Panic,
    /// The computation returned an error value.
    Error,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panic => formatter.write_str("panic"),
            Self::Error => formatter.write_str("error"),
        }
    }
}

/// A structured description of a failed computation.
///
/// `Display` renders only the message, so a `Failure` reads the same as the
/// textual description it replaces.
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::Failure;
///
/// let failure = Failure::panic("division by zero");
/// assert_eq!(failure.message(), "division by zero");
/// assert_eq!(format!("{failure}"), "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Failure {
    kind: FailureKind,
    message: String,
}

impl Failure {
    /// Creates a failure of the given kind.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a failure describing a caught panic.
    pub fn panic(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Panic, message)
    }

    /// Creates a failure describing a returned error value.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Error, message)
    }

    /// Returns the failure category.
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the textual description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the failure and returns its description.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Resumes unwinding with this failure as the panic payload.
    ///
    /// An enclosing [`Result::try_catch`](super::Result::try_catch) recovers
    /// the failure unchanged, kind included. The panic hook does not run, so
    /// nothing is printed if no adapter catches it.
    pub fn raise(self) -> ! {
        std::panic::resume_unwind(Box::new(self))
    }

    /// Builds a failure from a panic payload.
    ///
    /// A payload that already is a `Failure` (see [`Failure::raise`]) is
    /// returned as is; string payloads become
    /// [`FailureKind::Panic`] failures.
    pub(crate) fn from_panic_payload(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Self>() {
            Ok(failure) => *failure,
            Err(payload) => {
                let message = if let Some(string) = payload.downcast_ref::<&str>() {
                    (*string).to_string()
                } else if let Some(string) = payload.downcast_ref::<String>() {
                    string.clone()
                } else {
                    "Unknown panic".to_string()
                };
                Self::panic(message)
            }
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for Failure {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn failure_display_is_message() {
        let failure = Failure::error("bad input");
        assert_eq!(format!("{failure}"), "bad input");
    }

    #[rstest]
    fn failure_kind_display() {
        assert_eq!(FailureKind::Panic.to_string(), "panic");
        assert_eq!(FailureKind::Error.to_string(), "error");
    }

    #[rstest]
    fn failure_equality_includes_kind() {
        assert_eq!(Failure::panic("x"), Failure::panic("x"));
        assert_ne!(Failure::panic("x"), Failure::error("x"));
        assert_ne!(Failure::panic("x"), Failure::panic("y"));
    }

    #[rstest]
    fn failure_debug_names_fields() {
        let debug_string = format!("{:?}", Failure::panic("oops"));
        assert!(debug_string.contains("Failure"));
        assert!(debug_string.contains("Panic"));
        assert!(debug_string.contains("oops"));
    }

    #[rstest]
    fn failure_into_message() {
        assert_eq!(Failure::panic("gone").into_message(), "gone");
    }

    #[rstest]
    fn from_static_str_payload() {
        let payload = catch_unwind(|| panic!("static message")).unwrap_err();
        assert_eq!(
            Failure::from_panic_payload(payload),
            Failure::panic("static message")
        );
    }

    #[rstest]
    fn from_formatted_payload() {
        let code = 7;
        let payload = catch_unwind(|| panic!("code {code}")).unwrap_err();
        assert_eq!(Failure::from_panic_payload(payload), Failure::panic("code 7"));
    }

    #[rstest]
    fn from_unknown_payload() {
        let payload = catch_unwind(|| std::panic::panic_any(42_u8)).unwrap_err();
        assert_eq!(
            Failure::from_panic_payload(payload),
            Failure::panic("Unknown panic")
        );
    }

    #[rstest]
    fn raise_unwinds_with_failure_payload() {
        let original = Failure::error("kept intact");
        let raised = original.clone();
        let payload = catch_unwind(AssertUnwindSafe(|| raised.raise())).unwrap_err();
        assert_eq!(payload.downcast_ref::<Failure>(), Some(&original));
    }

    #[rstest]
    fn raised_failure_survives_payload_conversion() {
        let payload = catch_unwind(|| Failure::error("io").raise()).unwrap_err();
        assert_eq!(Failure::from_panic_payload(payload), Failure::error("io"));
    }

    #[rstest]
    fn failure_is_an_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&Failure::panic("x"));
    }
}
