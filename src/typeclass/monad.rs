//! Monadic type class - the capability set shared by every container.
//!
//! This module provides the [`Monadic`] trait: `map`, `flatmap` and
//! truthiness. It is deliberately minimal. The do-notation engine in
//! [`crate::effect`] is written purely against it and never learns which
//! concrete variant (`Some`, `Nothing`, `Ok`, `Err`) it is driving.
//!
//! # Laws
//!
//! All `Monadic` implementations must satisfy these laws, where `unit` is
//! the constructor of the truthy variant (`Monad::new`, `Some`, `Ok`):
//!
//! ## Left Identity Law
//!
//! ```text
//! unit(a).flatmap(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flatmap(unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flatmap(f).flatmap(g) == m.flatmap(|x| f(x).flatmap(g))
//! ```
//!
//! ## Truthiness
//!
//! A falsy value never invokes the function passed to `map` or `flatmap`
//! and propagates itself unchanged. This is what makes short-circuiting
//! generic.
//!
//! # Examples
//!
//! ```rust
//! use rustymonad::control::{Nothing, Option, Some};
//! use rustymonad::typeclass::Monadic;
//!
//! fn halve<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Monadic<Inner = i32>,
//! {
//!     Monadic::map(value, |n| n / 2)
//! }
//!
//! assert_eq!(halve(Some(10)), Some(5));
//! assert_eq!(halve(Option::<i32>::Nothing), Nothing);
//! ```

use super::base::Monad;
use super::higher::TypeConstructor;

/// A type class for containers that support mapping and sequencing.
///
/// `Monadic` is the generic face of [`Monad`], `Option` and `Result`.
/// Each of them also carries inherent methods with the same names, so
/// concrete code never needs this trait in scope; generic code (the
/// do-notation engine, law tests) goes through it.
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::{Err, Ok, Result};
/// use rustymonad::typeclass::Monadic;
///
/// fn first_truthy<M: Monadic>(candidates: Vec<M>) -> std::option::Option<M> {
///     candidates.into_iter().find(Monadic::is_truthy)
/// }
///
/// let found = first_truthy(vec![Err("a"), Ok(2), Ok(3)]);
/// assert_eq!(found, std::option::Option::Some(Ok(2)));
/// ```
pub trait Monadic: TypeConstructor + Sized {
    /// Applies a function to the inner value, keeping the container shape.
    ///
    /// Falsy values are returned unchanged and `function` is not called.
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function returning a new container and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind). Falsy values are returned
    /// unchanged and `function` is not called.
    fn flatmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Returns `false` for values that represent absence or failure.
    ///
    /// The truthiness of a container never depends on its payload:
    /// `Some(false)` and `Ok(0)` are truthy.
    fn is_truthy(&self) -> bool;

    /// Alias for `flatmap`, the method form of the `>>` chaining operator.
    #[inline]
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flatmap(function)
    }
}

// =============================================================================
// Monad<A> Implementation
// =============================================================================

impl<A> Monadic for Monad<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Monad<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::map(self, function)
    }

    #[inline]
    fn flatmap<B, F>(self, function: F) -> Monad<B>
    where
        F: FnOnce(A) -> Monad<B>,
    {
        Self::flatmap(self, function)
    }

    #[inline]
    fn is_truthy(&self) -> bool {
        Self::is_truthy(self)
    }
}
