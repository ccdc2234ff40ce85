//! Containers with absence and failure.
//!
//! This module provides the two sum types built on the base wrapper:
//!
//! - [`Option`]: A value that may be absent (`Some` or `Nothing`)
//! - [`Result`]: A value or an error (`Ok` or `Err`)
//! - [`Failure`]: The description an `Err` carries after a caught panic
//!
//! The variants are re-exported next to their types, so `Some(1)`,
//! `Nothing`, `Ok(1)` and `Err(e)` can be written directly once imported.
//! Importing them shadows the standard library's prelude names of the same
//! spelling; use the [`From`] conversions to cross over.
//!
//! # Examples
//!
//! ## Absence
//!
//! ```rust
//! use rustymonad::control::{Nothing, Option, Some};
//!
//! let present = Some(1).map(|x| x + 1);
//! assert_eq!(present, Some(2));
//!
//! let absent: Option<i32> = Nothing;
//! assert_eq!(absent.map(|x| x + 1).unwrap_or(-1), -1);
//! ```
//!
//! ## Failure
//!
//! ```rust
//! use rustymonad::control::{Err, Failure, Ok, Result};
//!
//! let caught = Result::try_catch(|| -> i32 { panic!("something wrong") });
//! assert_eq!(caught, Err(Failure::panic("something wrong")));
//!
//! let converted: std::result::Result<i32, Failure> = Ok::<i32, Failure>(1).into();
//! assert_eq!(converted, std::result::Result::Ok(1));
//! ```

mod failure;
mod option;
mod result;

pub use failure::{Failure, FailureKind};
pub use option::Option;
pub use option::Option::{Nothing, Some};
pub use result::Result;
pub use result::Result::{Err, Ok};
