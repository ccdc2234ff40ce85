//! mdo! macro for do-notation style syntax.
//!
//! This module provides the `mdo!` macro, the compile-time counterpart of the
//! [`run`](super::run) engine. Each bind is expanded into a nested `flatmap`
//! call, so a falsy value short-circuits the rest of the block exactly as the
//! engine does.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: extracts the value from the container
//! - `let pattern = expression;` - Pure let binding
//! - `let _ = expression;` - Evaluates an expression for its side effect
//! - `ensure(condition, fallback);` - Guard: continues only if `condition`
//!   holds, otherwise the block evaluates to `fallback`
//! - `expression` - Final expression (already a container)
//!
//! # Examples
//!
//! ## Option
//!
//! ```rust
//! use rustymonad::control::{Nothing, Option, Some};
//! use rustymonad::mdo;
//!
//! let result = mdo! {
//!     x <= Some(5);
//!     y <= Some(10);
//!     let z = x + y;
//!     Some(z * 2)
//! };
//! assert_eq!(result, Some(30));
//!
//! let missing: Option<i32> = mdo! {
//!     x <= Some(5);
//!     y <= Option::<i32>::Nothing;
//!     Some(x + y)
//! };
//! assert_eq!(missing, Nothing);
//! ```
//!
//! ## Result
//!
//! ```rust
//! use rustymonad::control::{Err, Ok, Result};
//! use rustymonad::mdo;
//!
//! fn safe_sqrt(x: f64) -> Result<f64, String> {
//!     if x < 0.0 { Err("sqrt negative".to_string()) } else { Ok(x.sqrt()) }
//! }
//!
//! fn safe_div(x: f64, y: f64) -> Result<f64, String> {
//!     if y == 0.0 { Err("division by zero".to_string()) } else { Ok(x / y) }
//! }
//!
//! let result = mdo! {
//!     root <= safe_sqrt(9.0);
//!     quotient <= safe_div(root, 2.0);
//!     Ok(quotient)
//! };
//! assert_eq!(result, Ok(1.5));
//! ```
//!
//! ## Guards
//!
//! ```rust
//! use rustymonad::control::{Err, Ok, Result};
//! use rustymonad::mdo;
//!
//! fn checked_div(x: i32, y: i32) -> Result<i32, String> {
//!     mdo! {
//!         ensure(y != 0, Err("division by zero".to_string()));
//!         Ok(x / y)
//!     }
//! }
//!
//! assert_eq!(checked_div(7, 2), Ok(3));
//! assert_eq!(checked_div(7, 0), Err("division by zero".to_string()));
//! ```
//!
//! # Implementation Notes
//!
//! The macro expands `pattern <= expression; rest` into:
//! ```rust,ignore
//! expression.flatmap(move |pattern| { /* rest */ })
//! ```
//!
//! `Monad`, `Option` and `Result` all carry an inherent `flatmap`, so no
//! trait needs to be in scope at the call site.

/// A macro for monadic do-notation style syntax.
///
/// # Syntax
///
/// ```text
/// mdo! {
///     pattern <= container_expression;    // Bind operation (flatmap)
///     let pattern = expression;            // Pure let binding
///     let _ = expression;                  // Side effect only
///     ensure(condition, fallback);         // Guard, fallback is a container
///     container_expression                 // Final expression
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::{Err, Ok, Result};
/// use rustymonad::mdo;
///
/// let result: Result<i32, &str> = mdo! {
///     (a, b) <= Ok((1, 2));
///     _ <= Ok(());
///     Ok(a + b)
/// };
/// assert_eq!(result, Ok(3));
///
/// let failed: Result<i32, &str> = mdo! {
///     x <= Ok(1);
///     _ <= Err::<(), &str>("stop");
///     Ok(x)
/// };
/// assert_eq!(failed, Err("stop"));
/// ```
#[macro_export]
macro_rules! mdo {
    // ==========================================================================
    // Terminal case
    // ==========================================================================

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Guard: ensure(condition, fallback); rest
    // ==========================================================================

    (ensure ($condition:expr, $fallback:expr) ; $($rest:tt)+) => {
        if $condition {
            $crate::mdo!($($rest)+)
        } else {
            $fallback
        }
    };

    // ==========================================================================
    // Bind operation: pattern <= container; rest
    // ==========================================================================

    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $monad.flatmap(move |$pattern| {
            $crate::mdo!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $monad.flatmap(move |($($pattern)*)| {
            $crate::mdo!($($rest)+)
        })
    };

    (_ <= $monad:expr ; $($rest:tt)+) => {
        $monad.flatmap(move |_| {
            $crate::mdo!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let _ = $expr:expr ; $($rest:tt)+) => {
        {
            let _ = $expr;
            $crate::mdo!($($rest)+)
        }
    };

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::mdo!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::mdo!($($rest)+)
        }
    };
}
