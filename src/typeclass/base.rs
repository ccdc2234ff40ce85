//! The base monadic wrapper.
//!
//! [`Monad`] is the simplest possible container: it wraps a single value and
//! has no notion of absence or failure. It is what `Option` and `Result`
//! specialize, and a convenient model for testing the monad laws.

use std::fmt;
use std::ops::Shr;

use super::TypeConstructor;

/// A minimal wrapper around exactly one value.
///
/// `unwrap` never fails and truthiness is always `true`: absence and failure
/// are introduced only by `Option` and `Result`.
///
/// # Examples
///
/// ```rust
/// use rustymonad::typeclass::Monad;
///
/// let wrapped = Monad::new(1);
/// assert_eq!(wrapped.map(|x| x + 1), Monad::new(2));
/// assert_eq!(wrapped.flatmap(|x| Monad::new(x - 1)), Monad::new(0));
///
/// // `>>` chains like `flatmap`
/// let chained = wrapped >> (|x: i32| Monad::new(x + 2)) >> (|x: i32| Monad::new(x * x));
/// assert_eq!(chained, Monad::new(9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Monad<A>(A);

impl<A> Monad<A> {
    /// Creates a new `Monad` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the held value. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustymonad::typeclass::Monad;
    ///
    /// assert_eq!(Monad::new("held").unwrap(), "held");
    /// ```
    #[inline]
    pub fn unwrap(self) -> A {
        self.0
    }

    /// Returns a reference to the held value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Returns `Monad(function(value))`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Monad<B>
    where
        F: FnOnce(A) -> B,
    {
        Monad(function(self.0))
    }

    /// Returns `function(value)` directly.
    #[inline]
    pub fn flatmap<B, F>(self, function: F) -> Monad<B>
    where
        F: FnOnce(A) -> Monad<B>,
    {
        function(self.0)
    }

    /// Always `true`: the base wrapper has no absence concept.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        true
    }
}

impl<A> TypeConstructor for Monad<A> {
    type Inner = A;
    type WithType<B> = Monad<B>;
}

impl<A> From<A> for Monad<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A, B, F> Shr<F> for Monad<A>
where
    F: FnOnce(A) -> Monad<B>,
{
    type Output = Monad<B>;

    #[inline]
    fn shr(self, function: F) -> Monad<B> {
        self.flatmap(function)
    }
}

impl<A: fmt::Display> fmt::Display for Monad<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Monad({})", self.0)
    }
}

static_assertions::assert_impl_all!(Monad<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Monad<String>: Send, Sync);
