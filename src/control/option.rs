//! Option type - a value that may be absent.
//!
//! This module provides [`Option<T>`], a closed sum of `Some(T)` and the
//! unit variant `Nothing`. It mirrors the shape of the standard library's
//! option but is a distinct type that takes part in the [`Monadic`]
//! capability set, has a notion of truthiness and converts to and from this
//! crate's [`Result`].
//!
//! # Examples
//!
//! ```rust
//! use rustymonad::control::{Err, Nothing, Ok, Option, Some};
//!
//! let present: Option<i32> = Some(1);
//! let absent: Option<i32> = Nothing;
//!
//! assert_eq!(present.map(|x| -x), Some(-1));
//! assert_eq!(absent.map(|x| -x), Nothing);
//!
//! assert_eq!(present.filter(|x| x % 2 == 0), Nothing);
//! assert_eq!(absent.ok_or("missing"), Err("missing"));
//! assert_eq!(present.ok_or("missing"), Ok(1));
//! ```

use std::fmt;
use std::ops::Shr;

use super::result::Result;
use crate::typeclass::{Monadic, TypeConstructor};

/// A value that is either present (`Some`) or absent (`Nothing`).
///
/// `Nothing` carries no state: every `Nothing` of a given type equals every
/// other. `Nothing` orders before any `Some`.
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::{Nothing, Option, Some};
///
/// let value: Option<i32> = Some(1);
/// let result = value
///     .and_then(|x| Some(x.to_string()))
///     .filter(|text| text.len() == 1)
///     .unwrap_or_default();
/// assert_eq!(result, "1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<T> {
    /// No value.
    Nothing,
    /// A present value.
    Some(T),
}

impl<T> Option<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` if this is `Some` and the value satisfies `predicate`.
    ///
    /// `predicate` is not called on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Nothing, Option, Some};
    ///
    /// assert!(Some(1).is_some_and(|x| x % 2 == 1));
    /// assert!(!Some(1).is_some_and(|x| x > 1));
    /// assert!(!Option::<i32>::Nothing.is_some_and(|_| true));
    /// ```
    #[inline]
    pub fn is_some_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::Nothing => false,
        }
    }

    /// Returns `true` for `Some`, whatever the payload, and `false` for
    /// `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Nothing, Option, Some};
    ///
    /// assert!(Some(false).is_truthy());
    /// assert!(Some(()).is_truthy());
    /// assert!(!Option::<bool>::Nothing.is_truthy());
    /// ```
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        self.is_some()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, consuming the option.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::Some;
    ///
    /// assert_eq!(Some(1).expect("nothing here"), 1);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => panic!("{message}"),
        }
    }

    /// Returns the contained value, consuming the option.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use rustymonad::control::{Nothing, Option};
    ///
    /// let absent: Option<i32> = Nothing;
    /// absent.unwrap(); // called `Option::unwrap()` on a `Nothing` value
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => panic!("called `Option::unwrap()` on a `Nothing` value"),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => function(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // =========================================================================
    // Mapping and Sequencing
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// `Nothing` is returned unchanged and `function` is not called. This is
    /// also the way to feed `and_then`-style chains with a callback that
    /// returns a plain value rather than an `Option`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::Nothing => Option::Nothing,
        }
    }

    /// Applies `function` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => default,
        }
    }

    /// Returns `function(value)` for `Some`, `Nothing` otherwise.
    ///
    /// This is the monadic bind; [`and_then`](Self::and_then) is the same
    /// operation under the Rust naming convention.
    #[inline]
    pub fn flatmap<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => Option::Nothing,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// `Nothing` short-circuits: `function` is not called and `Nothing` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Nothing, Option, Some};
    ///
    /// assert_eq!(Some(1).and_then(|x| Some((x + 1).to_string())), Some("2".to_string()));
    /// assert_eq!(Some(1).and_then(|_| Option::<i32>::Nothing), Nothing);
    /// assert_eq!(Option::<i32>::Nothing.and_then(|x| Some(x + 1)), Nothing);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.flatmap(function)
    }

    /// Recovers from `Nothing` by calling `function`.
    ///
    /// `Some` is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Nothing, Option, Some};
    ///
    /// assert_eq!(Some(1).or_else(|| Some(0)), Some(1));
    /// assert_eq!(Option::<i32>::Nothing.or_else(|| Some(0)), Some(0));
    /// assert_eq!(Option::<i32>::Nothing.or_else(|| Nothing), Nothing);
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::Nothing => function(),
        }
    }

    /// Calls `function` with a reference to the contained value and returns
    /// the option unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Nothing, Option, Some};
    ///
    /// let mut seen = vec![1];
    /// let value = Some(1).inspect(|x| seen.push(x + 1));
    /// Option::<i32>::Nothing.inspect(|x| seen.push(x + 1));
    /// assert_eq!(value, Some(1));
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Keeps `Some` only if the value satisfies `predicate`.
    ///
    /// A `Some` failing the predicate collapses to `Nothing`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self {
            if predicate(&value) {
                return Self::Some(value);
            }
        }
        Self::Nothing
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::Nothing => Option::Nothing,
        }
    }

    // =========================================================================
    // Conversion to Result
    // =========================================================================

    /// Converts to `Ok(value)`, or `Err(error)` for `Nothing`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::Nothing => Result::Err(error),
        }
    }

    /// Converts to `Ok(value)`, or `Err(function())` for `Nothing`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::Nothing => Result::Err(function()),
        }
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::control::{Nothing, Option, Some};
    ///
    /// assert_eq!(Some(Some(3)).flatten(), Some(3));
    /// assert_eq!(Some(Option::<i32>::Nothing).flatten(), Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Option<T> {
        self.flatmap(|inner| inner)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Option<T> {
    type Inner = T;
    type WithType<B> = Option<B>;
}

impl<T> Monadic for Option<T> {
    #[inline]
    fn map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(T) -> B,
    {
        Self::map(self, function)
    }

    #[inline]
    fn flatmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(T) -> Option<B>,
    {
        Self::flatmap(self, function)
    }

    #[inline]
    fn is_truthy(&self) -> bool {
        Self::is_truthy(self)
    }
}

impl<T, U, F> Shr<F> for Option<T>
where
    F: FnOnce(T) -> Option<U>,
{
    type Output = Option<U>;

    #[inline]
    fn shr(self, function: F) -> Option<U> {
        self.flatmap(function)
    }
}

impl<T> Default for Option<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Option::Some({value})"),
            Self::Nothing => formatter.write_str("Option::Nothing"),
        }
    }
}

// =============================================================================
// Standard Library Conversions
// =============================================================================

impl<T> From<core::option::Option<T>> for Option<T> {
    /// `Some(v)` becomes `Some(v)` and `None` becomes `Nothing`.
    #[inline]
    fn from(option: core::option::Option<T>) -> Self {
        match option {
            core::option::Option::Some(value) => Self::Some(value),
            core::option::Option::None => Self::Nothing,
        }
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    /// `Some(v)` becomes `Some(v)` and `Nothing` becomes `None`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Option::Some(value) => Self::Some(value),
            Option::Nothing => Self::None,
        }
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    /// Yields the contained value once, or nothing.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let option: core::option::Option<T> = self.into();
        option.into_iter()
    }
}

static_assertions::assert_impl_all!(Option<i32>: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(Option<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    const SOME_VALUE: Option<i32> = Option::Some(1);
    const NO_VALUE: Option<i32> = Option::Nothing;

    #[rstest]
    fn test_expect_returns_value() {
        assert_eq!(SOME_VALUE.expect("nothing here"), 1);
    }

    #[rstest]
    #[should_panic(expected = "nothing here")]
    fn test_expect_panics_with_message_on_nothing() {
        NO_VALUE.expect("nothing here");
    }

    #[rstest]
    #[should_panic(expected = "called `Option::unwrap()` on a `Nothing` value")]
    fn test_unwrap_panics_on_nothing() {
        NO_VALUE.unwrap();
    }

    #[rstest]
    #[case(SOME_VALUE, 1)]
    #[case(NO_VALUE, 9)]
    fn test_unwrap_or(#[case] value: Option<i32>, #[case] expected: i32) {
        assert_eq!(value.unwrap_or(9), expected);
    }

    #[rstest]
    fn test_unwrap_or_else_is_lazy() {
        let calls = Cell::new(0);
        let value = SOME_VALUE.unwrap_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_filter() {
        assert_eq!(SOME_VALUE.filter(|x| x % 2 == 1), Option::Some(1));
        assert_eq!(SOME_VALUE.filter(|x| x % 2 == 0), Option::Nothing);
        assert_eq!(NO_VALUE.filter(|x| x % 2 == 1), Option::Nothing);
    }

    #[rstest]
    fn test_filter_predicate_not_called_on_nothing() {
        let calls = Cell::new(0);
        let _ = NO_VALUE.filter(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_or_else_not_called_on_some() {
        let calls = Cell::new(0);
        let value = SOME_VALUE.or_else(|| {
            calls.set(calls.get() + 1);
            Option::Some(0)
        });
        assert_eq!(value, Option::Some(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_and_then_then_or_else() {
        let recovered = SOME_VALUE
            .and_then(|_| Option::<i32>::Nothing)
            .or_else(|| Option::Some(-1));
        assert_eq!(recovered, Option::Some(-1));
    }

    #[rstest]
    fn test_truthiness_ignores_payload() {
        assert!(Option::Some(false).is_truthy());
        assert!(Option::Some(0).is_truthy());
        assert!(!NO_VALUE.is_truthy());
    }

    #[rstest]
    fn test_nothing_equality_is_structural() {
        let first: Option<String> = Option::Nothing;
        let second: Option<String> = Option::default();
        assert_eq!(first, second);
        assert_ne!(Option::Some(String::new()), first);
    }

    #[rstest]
    fn test_nothing_orders_first() {
        assert!(NO_VALUE < SOME_VALUE);
        assert!(Option::Some(1) < Option::Some(2));
    }

    #[rstest]
    fn test_std_conversion_roundtrip() {
        let converted: Option<i32> = core::option::Option::Some(5).into();
        assert_eq!(converted, Option::Some(5));
        let back: core::option::Option<i32> = converted.into();
        assert_eq!(back, core::option::Option::Some(5));

        let empty: Option<i32> = core::option::Option::<i32>::None.into();
        assert_eq!(empty, Option::Nothing);
    }

    #[rstest]
    fn test_into_iter() {
        assert_eq!(SOME_VALUE.into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(NO_VALUE.into_iter().count(), 0);
    }

    #[rstest]
    fn test_as_ref_keeps_original() {
        let owned = Option::Some(String::from("hello"));
        assert_eq!(owned.as_ref().map(|text| text.len()), Option::Some(5));
        assert!(owned.is_some());
    }

    #[rstest]
    fn test_shift_operator() {
        let result = SOME_VALUE >> (|x: i32| Option::Some(x + 2)) >> (|x: i32| Option::Some(x * x));
        assert_eq!(result, Option::Some(9));

        let short = NO_VALUE >> (|x: i32| Option::Some(x + 2));
        assert_eq!(short, Option::Nothing);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{SOME_VALUE:?}"), "Some(1)");
        assert_eq!(format!("{NO_VALUE:?}"), "Nothing");
    }
}
