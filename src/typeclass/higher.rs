//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `Result<_, E>` directly. [`TypeConstructor`] records the type a container
//! is currently applied to and how to re-apply the same constructor to
//! another type, which is all [`Monadic`](super::Monadic) needs to describe
//! `map` and `flatmap` generically.
//!
//! # Example
//!
//! ```rust
//! use rustymonad::control::{Nothing, Option, Some};
//! use rustymonad::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Option<i32> = Some(42);
//! let empty: Option<String> = emptied(present);
//! assert_eq!(empty, Nothing);
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type `A`,
/// for example `Option<A>`, `Result<A, E>` or `Monad<A>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Option<i32>` this is `i32`; for `Result<i32, String>` it is the
    /// success type `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Result<i32, String>`, `WithType<bool>` is `Result<bool, String>`:
    /// the error channel is part of the constructor and is preserved.
    type WithType<B>: TypeConstructor<Inner = B>;
}
