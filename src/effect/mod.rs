//! Sequencing and fallible-call adapters.
//!
//! This module provides the two ways of composing computations over the
//! containers in [`crate::control`]:
//!
//! # Do-Notation
//!
//! - [`run`]: drives a [`Suspendable`] computation, short-circuiting on the
//!   first falsy value
//! - [`Steps`]: builds a suspendable [`Program`] from closures
//! - [`do_notation`]: turns a computation builder into a plain function
//! - [`mdo!`](crate::mdo): the same sequencing resolved at compile time
//!
//! ```rust
//! use rustymonad::control::{Nothing, Option, Some};
//! use rustymonad::effect::{Steps, run};
//! use rustymonad::mdo;
//!
//! let engine = run(Steps::new(|| Some(5)).bind(|x| Some(x + 10)).finish(|y| Some(y * 2)));
//! let expanded = mdo! {
//!     x <= Some(5);
//!     y <= Some(x + 10);
//!     Some(y * 2)
//! };
//! assert_eq!(engine, expanded);
//!
//! let absent: Option<i32> = run(Steps::new(|| Some(5)).bind(|_| Nothing).finish(Some));
//! assert_eq!(absent, Nothing);
//! ```
//!
//! # Fallible Calls
//!
//! - [`try_notation`]: wraps a function so that a panic becomes
//!   `Err(Failure)`
//! - [`try_result`]: runs a computation returning a standard library
//!   `Result` and folds both its error and a panic into `Err(Failure)`
//!
//! ```rust
//! use rustymonad::control::{Err, Failure, Ok};
//! use rustymonad::effect::try_notation;
//!
//! let first_char = try_notation(|text: &str| text.chars().next().expect("empty input"));
//! assert_eq!(first_char("abc"), Ok('a'));
//! assert_eq!(first_char(""), Err(Failure::panic("empty input")));
//! ```

mod do_notation;
mod mdo_macro;
mod try_notation;

pub use do_notation::{Program, Step, Steps, Suspendable, do_notation, run};
pub use try_notation::{try_notation, try_result};
