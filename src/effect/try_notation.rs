//! Fallible-call adapters.
//!
//! [`try_notation`] turns a function that may panic into one that returns
//! [`Result<T, Failure>`]. [`try_result`] does the same for a computation
//! that reports failure through a standard library `Result`, keeping panics
//! and returned errors apart through [`FailureKind`](crate::control::FailureKind).

use std::fmt::Display;

use crate::control::{Failure, Result};

/// Wraps `function` so that a panic becomes `Err(Failure)`.
///
/// The wrapped function takes one argument; pass a tuple when several
/// values are needed.
///
/// # Panics
///
/// Never propagates a panic from `function`. The panic hook still runs for
/// each caught panic, so its message is also printed to standard error
/// unless the hook is replaced with [`std::panic::set_hook`]. A `Failure`
/// raised through [`Result::reraise`] unwinds without running the hook.
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::{Err, Failure, Ok};
/// use rustymonad::effect::try_notation;
///
/// let divide = try_notation(|(x, y): (i32, i32)| x.checked_div(y).expect("division by zero"));
///
/// assert_eq!(divide((4, 2)), Ok(2));
/// assert_eq!(divide((1, 0)), Err(Failure::panic("division by zero")));
/// ```
pub fn try_notation<A, T, F>(function: F) -> impl Fn(A) -> Result<T, Failure>
where
    F: Fn(A) -> T,
{
    move |argument| Result::try_catch(|| function(argument))
}

/// Runs a computation returning a standard library `Result`.
///
/// `Ok(value)` becomes `Ok(value)`. A returned error becomes a
/// [`FailureKind::Error`](crate::control::FailureKind::Error) failure
/// described by its `Display` output, and a panic becomes a
/// [`FailureKind::Panic`](crate::control::FailureKind::Panic) failure.
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::{Err, Failure, Ok};
/// use rustymonad::effect::try_result;
///
/// assert_eq!(try_result(|| "42".parse::<i32>()), Ok(42));
/// assert_eq!(
///     try_result(|| "forty-two".parse::<i32>()),
///     Err(Failure::error("invalid digit found in string"))
/// );
/// ```
pub fn try_result<T, E, F>(function: F) -> Result<T, Failure>
where
    F: FnOnce() -> core::result::Result<T, E>,
    E: Display,
{
    Result::try_catch(function).flatmap(|outcome| match outcome {
        core::result::Result::Ok(value) => Result::Ok(value),
        core::result::Result::Err(error) => {
            let failure = Failure::error(error.to_string());
            #[cfg(feature = "tracing")]
            tracing::debug!(
                kind = %failure.kind(),
                description = failure.message(),
                "captured failure in fallible call"
            );
            Result::Err(failure)
        }
    })
}
