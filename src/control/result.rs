//! Result type - a value or an error.
//!
//! This module provides [`Result<T, E>`], a closed sum of `Ok(T)` and
//! `Err(E)`. It mirrors [`Option`](super::Option) with an error payload in
//! place of absence: `Err` short-circuits every success-channel operation,
//! `or_else` and `inspect_err` work on the error channel, and `ok()` /
//! `err()` convert to `Option`.
//!
//! [`Result::try_catch`] is the bridge from abnormal termination (a panic)
//! to an `Err` value.
//!
//! # Examples
//!
//! ```rust
//! use rustymonad::control::{Err, Nothing, Ok, Result, Some};
//!
//! fn safe_div(x: f64, y: f64) -> Result<f64, String> {
//!     if y == 0.0 {
//!         Err("division by zero".to_string())
//!     } else {
//!         Ok(x / y)
//!     }
//! }
//!
//! assert_eq!(safe_div(3.0, 2.0), Ok(1.5));
//! assert_eq!(safe_div(3.0, 0.0).ok(), Nothing);
//! assert_eq!(safe_div(3.0, 0.0).err(), Some("division by zero".to_string()));
//!
//! let recovered: Result<String, String> =
//!     Err("bad".to_string()).or_else(|error| Ok(error + " resolved!"));
//! assert_eq!(recovered, Ok("bad resolved!".to_string()));
//! ```

use std::fmt;
use std::ops::Shr;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::failure::Failure;
use super::option::Option;
use crate::typeclass::{Monadic, TypeConstructor};

/// Either a success value (`Ok`) or an error value (`Err`).
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::{Err, Ok, Result};
///
/// let parsed: Result<i32, String> = Ok(100);
/// let doubled = parsed
///     .inspect(|value| assert_eq!(*value, 100))
///     .map(|value| value * 2)
///     .unwrap_or(-1);
/// assert_eq!(doubled, 200);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant.
    Err(E),
}

impl<T, E> Result<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    ///
    /// `predicate` is not called on `Err`.
    #[inline]
    pub fn is_ok_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    ///
    /// `predicate` is not called on `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Err, Ok, Result};
    ///
    /// let failed: Result<i32, &str> = Err("something wrong");
    /// assert!(failed.is_err_and(|error| error.ends_with("wrong")));
    /// assert!(!failed.is_err_and(|error| error.starts_with("hello")));
    /// assert!(!Ok::<i32, &str>(100).is_err_and(|_| true));
    /// ```
    #[inline]
    pub fn is_err_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Returns `true` for `Ok`, whatever the payload, and `false` for `Err`.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        self.is_ok()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `"{message}: {error}"` if this is `Err`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use rustymonad::control::{Err, Result};
    ///
    /// let failed: Result<i32, &str> = Err("something wrong");
    /// failed.expect("operation failed"); // operation failed: something wrong
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{message}: {error}"),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `"{message}: {value}"` if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: fmt::Display,
    {
        match self {
            Self::Ok(value) => panic!("{message}: {value}"),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`, with the error's `Display` output as the
    /// message. A caught-panic [`Failure`] therefore comes back unchanged
    /// from a surrounding [`try_catch`](Result::try_catch); use
    /// [`reraise`](Result::reraise) to propagate any `Failure` kind intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Err, Ok, Result};
    ///
    /// fn first_word(text: &str) -> Result<usize, &str> {
    ///     text.find(' ').map_or(Err(text), Ok)
    /// }
    ///
    /// let owned = String::from("hello world");
    /// assert_eq!(first_word(&owned).unwrap(), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{error}"),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Ok`, using the success value as the description.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Display,
    {
        match self {
            Self::Ok(value) => panic!("{value}"),
            Self::Err(error) => error,
        }
    }

    // =========================================================================
    // Mapping and Sequencing
    // =========================================================================

    /// Applies `function` to the success value.
    ///
    /// `Err` passes through unchanged and `function` is never called.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Applies `function` to the error value.
    ///
    /// `Ok` passes through unchanged.
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => default,
        }
    }

    /// Returns `function(value)` for `Ok`, the error unchanged otherwise.
    #[inline]
    pub fn flatmap<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// The first `Err` wins: later functions in an `and_then` chain are not
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Err, Ok, Result};
    ///
    /// let start: Result<i32, String> = Ok(100);
    /// assert_eq!(start.clone().and_then(|x| Ok((x + 1).to_string())), Ok("101".to_string()));
    /// assert_eq!(
    ///     start.and_then(|_| Err::<i32, String>("another error".to_string())),
    ///     Err("another error".to_string())
    /// );
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.flatmap(function)
    }

    /// Recovers from `Err` by calling `function` with the error.
    ///
    /// `Ok` passes through unchanged and `function` is not called.
    #[inline]
    pub fn or_else<G, F>(self, function: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Result<T, G>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Calls `function` with a reference to the success value and returns
    /// the result unchanged.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the error value and returns the
    /// result unchanged.
    #[inline]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    // =========================================================================
    // Conversion to Option
    // =========================================================================

    /// Returns `Some(value)` for `Ok`, `Nothing` for `Err`.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::Nothing,
        }
    }

    /// Returns `Some(error)` for `Err`, `Nothing` for `Ok`.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::Nothing,
            Self::Err(error) => Option::Some(error),
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Result<T, E> {
        self.flatmap(|inner| inner)
    }
}

// =============================================================================
// Fallible-Call Adapter
// =============================================================================

impl<T> Result<T, Failure> {
    /// Runs `function`, turning a panic into `Err(Failure)`.
    ///
    /// Normal completion yields `Ok(value)`. A panic is caught and described
    /// as a [`Failure`]: a panic payload that already is a `Failure` is kept
    /// as is, string payloads become [`FailureKind::Panic`](super::FailureKind::Panic)
    /// failures carrying the panic message.
    ///
    /// The panic hook still runs for the caught panic, so the message is
    /// also printed to standard error unless the hook is replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Err, Failure, Ok, Result};
    ///
    /// let divide = |x: i32, y: i32| Result::try_catch(|| x.checked_div(y).expect("division by zero"));
    /// assert_eq!(divide(4, 2), Ok(2));
    /// assert_eq!(divide(1, 0), Err(Failure::panic("division by zero")));
    /// ```
    pub fn try_catch<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                let failure = Failure::from_panic_payload(payload);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    kind = %failure.kind(),
                    description = failure.message(),
                    "captured failure in fallible call"
                );
                Self::Err(failure)
            }
        }
    }

    /// Returns the success value, or resumes unwinding with the failure.
    ///
    /// Unlike [`unwrap`](Result::unwrap), the `Failure` itself becomes the
    /// panic payload, so an enclosing [`try_catch`](Result::try_catch)
    /// recovers it unchanged, [`FailureKind::Error`](super::FailureKind::Error)
    /// included.
    ///
    /// # Panics
    ///
    /// Unwinds with the `Failure` as payload if this is `Err`. The panic hook
    /// does not run for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Err, Failure, Result};
    ///
    /// let inner: Result<i32, Failure> = Err(Failure::error("disk full"));
    /// let outer = Result::try_catch(|| inner.reraise() + 1);
    /// assert_eq!(outer, Err(Failure::error("disk full")));
    /// ```
    pub fn reraise(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(failure) => failure.raise(),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T, E> Monadic for Result<T, E> {
    #[inline]
    fn map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        Self::map(self, function)
    }

    #[inline]
    fn flatmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::flatmap(self, function)
    }

    #[inline]
    fn is_truthy(&self) -> bool {
        Self::is_truthy(self)
    }
}

impl<T, E, U, F> Shr<F> for Result<T, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    type Output = Result<U, E>;

    #[inline]
    fn shr(self, function: F) -> Result<U, E> {
        self.flatmap(function)
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Result::Ok({value})"),
            Self::Err(error) => write!(formatter, "Result::Err({error})"),
        }
    }
}

// =============================================================================
// Standard Library Conversions
// =============================================================================

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            core::result::Result::Ok(value) => Self::Ok(value),
            core::result::Result::Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Self::Ok(value),
            Result::Err(error) => Self::Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Result<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(Result<i32, Failure>: Send, Sync, std::panic::UnwindSafe);
