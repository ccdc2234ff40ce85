//! # rustymonad
//!
//! Explicit, composable representations of "a value that may be absent"
//! ([`Option`](control::Option)) and "a value or an error"
//! ([`Result`](control::Result)), layered on a minimal monadic interface,
//! plus a do-notation engine that sequences such values while
//! short-circuiting on the first absent or failed step.
//!
//! ## Overview
//!
//! - **Type Classes**: [`TypeConstructor`](typeclass::TypeConstructor),
//!   [`Monadic`](typeclass::Monadic) and the base wrapper
//!   [`Monad`](typeclass::Monad)
//! - **Control Types**: `Option` (`Some` / `Nothing`) and `Result`
//!   (`Ok` / `Err`), with [`Failure`](control::Failure) describing caught
//!   abnormal terminations
//! - **Effects**: the do-notation engine ([`run`](effect::run),
//!   [`do_notation`](effect::do_notation), [`Steps`](effect::Steps)), the
//!   [`mdo!`] macro and the fallible-call adapter
//!   ([`try_notation`](effect::try_notation))
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor`, `Monadic`, `Monad`
//! - `control`: `Option`, `Result`, `Failure`
//! - `effect`: do-notation engine, `mdo!`, try-wrap adapter
//! - `serde`: `Serialize` / `Deserialize` for every value type
//! - `tracing`: trace events from the engine and the adapter
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rustymonad::prelude::*;
//!
//! fn safe_sqrt(x: f64) -> Result<f64, String> {
//!     if x < 0.0 {
//!         Err("sqrt negative".to_string())
//!     } else {
//!         Ok(x.sqrt())
//!     }
//! }
//!
//! fn safe_div(x: f64, y: f64) -> Result<f64, String> {
//!     if y == 0.0 {
//!         Err("division by zero".to_string())
//!     } else {
//!         Ok(x / y)
//!     }
//! }
//!
//! assert_eq!(safe_sqrt(9.0).and_then(|root| safe_div(root, 2.0)), Ok(1.5));
//! assert_eq!(
//!     safe_sqrt(-9.0).and_then(|root| safe_div(root, 2.0)),
//!     Err("sqrt negative".to_string())
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module. Importing the prelude brings this
/// crate's `Option`, `Some`, `Nothing`, `Result`, `Ok` and `Err` into scope,
/// shadowing the standard library's prelude names.
///
/// # Usage
///
/// ```rust
/// use rustymonad::prelude::*;
///
/// let value: Option<i32> = Some(1);
/// assert!(value.is_some());
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "effect")]
    pub use crate::mdo;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
