//! Type class traits and the base monadic wrapper.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Monadic`]: `map`, `flatmap` and truthiness, the capability set every
//!   container in this crate shares
//! - [`Monad`]: the minimal wrapper around a single value
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This module uses Generic Associated Types (GAT) to emulate HKT
//! behavior, which lets [`Monadic::flatmap`] name "the same container
//! around another type" generically.
//!
//! # Examples
//!
//! ```rust
//! use rustymonad::typeclass::{Monad, Monadic};
//!
//! let x = Monad::new(5);
//! let y = Monadic::flatmap(x, |n| Monad::new(n * 2));
//! assert_eq!(y, Monad::new(10));
//! assert!(Monadic::is_truthy(&y));
//! ```

mod base;
mod higher;
mod monad;

pub use base::Monad;
pub use higher::TypeConstructor;
pub use monad::Monadic;
