//! Do-notation engine for suspendable computations.
//!
//! A computation that chains several monadic values can be written as a
//! sequence of suspension points: at each one it hands a monadic value to
//! the engine and waits to be resumed with that value's inner payload. The
//! engine in [`run`] drives such a computation through the values'
//! `map` and stops at the first falsy value (`Nothing`, `Err`), which
//! becomes the overall result. Reaching the end yields the computation's
//! final value instead, which may carry a different payload type.
//!
//! The engine never learns which container it drives: it relies only on
//! [`Monadic::map`], [`Monadic::flatmap`] and [`Monadic::is_truthy`], so the
//! same driver works for `Option`, `Result` and the base `Monad`.
//!
//! A computation is any [`Suspendable`] value. Hand-written state machines
//! implement the trait directly, and [`Steps`] builds one from closures.
//!
//! # Examples
//!
//! ```rust
//! use rustymonad::control::{Err, Ok, Result};
//! use rustymonad::effect::{Steps, run};
//!
//! fn safe_sqrt(x: f64) -> Result<f64, String> {
//!     if x < 0.0 { Err("sqrt negative".to_string()) } else { Ok(x.sqrt()) }
//! }
//!
//! fn safe_div(x: f64, y: f64) -> Result<f64, String> {
//!     if y == 0.0 { Err("division by zero".to_string()) } else { Ok(x / y) }
//! }
//!
//! let program = Steps::new(|| safe_sqrt(9.0))
//!     .bind(|root| safe_div(root, 2.0))
//!     .finish(Ok);
//! assert_eq!(run(program), Ok(1.5));
//!
//! let program = Steps::new(|| safe_sqrt(-9.0))
//!     .bind(|root| safe_div(root, 2.0))
//!     .finish(Ok);
//! assert_eq!(run(program), Err("sqrt negative".to_string()));
//!
//! let program = Steps::new(|| safe_sqrt(9.0))
//!     .bind(|root| safe_div(root, 2.0))
//!     .finish(|quotient| Ok(quotient.to_string()));
//! assert_eq!(run(program), Ok("1.5".to_string()));
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::typeclass::{Monadic, TypeConstructor};

/// The outcome of advancing a [`Suspendable`] computation by one step.
///
/// `M` is the type suspended on and `R` the type the computation completes
/// with. They are the same container, possibly around different payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<M, R = M> {
    /// The computation suspended on this value and expects to be resumed
    /// with its inner payload.
    Yield(M),
    /// The computation finished with this final value.
    Complete(R),
}

impl<M, R> Step<M, R> {
    /// Returns `true` for [`Step::Complete`].
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

impl<M> Step<M> {
    /// Returns the carried value, discarding whether the computation
    /// suspended or completed.
    #[inline]
    pub fn into_inner(self) -> M {
        match self {
            Self::Yield(value) | Self::Complete(value) => value,
        }
    }
}

/// A computation that suspends on monadic values of type `M` and completes
/// with a value of type `R`.
///
/// `R` defaults to `M`. When it differs, it must be the same container
/// around another payload (`Result<String, E>` after `Result<f64, E>`
/// yields), so a falsy yield can stand in for the result.
///
/// The engine calls [`start`](Suspendable::start) exactly once, then
/// [`resume`](Suspendable::resume) with the inner value of each truthy
/// yielded value until the computation completes. It never resumes after a
/// falsy yield.
///
/// # Examples
///
/// A hand-written state machine that takes the square root, then divides:
///
/// ```rust
/// use rustymonad::control::{Nothing, Option, Some};
/// use rustymonad::effect::{Step, Suspendable, run};
///
/// struct SqrtThenDivide {
///     value: f64,
///     divisor: f64,
/// }
///
/// impl Suspendable<Option<f64>> for SqrtThenDivide {
///     fn start(&mut self) -> Step<Option<f64>> {
///         if self.value < 0.0 {
///             Step::Yield(Nothing)
///         } else {
///             Step::Yield(Some(self.value.sqrt()))
///         }
///     }
///
///     fn resume(&mut self, root: f64) -> Step<Option<f64>> {
///         if self.divisor == 0.0 {
///             Step::Complete(Nothing)
///         } else {
///             Step::Complete(Some(root / self.divisor))
///         }
///     }
/// }
///
/// assert_eq!(run(SqrtThenDivide { value: 9.0, divisor: 2.0 }), Some(1.5));
/// assert_eq!(run(SqrtThenDivide { value: -9.0, divisor: 2.0 }), Nothing);
/// ```
pub trait Suspendable<M: Monadic, R = M> {
    /// Runs the computation up to its first suspension point.
    fn start(&mut self) -> Step<M, R>;

    /// Resumes the computation with the inner value of the last yield.
    fn resume(&mut self, value: M::Inner) -> Step<M, R>;
}

/// Drives `computation` to its result.
///
/// 1. The computation is started. If it completes immediately, its value is
///    returned.
/// 2. A falsy yielded value is returned as is and the computation is not
///    resumed again.
/// 3. A truthy yielded value is bound with `map`: its inner value resumes
///    the computation, and the next yield takes its place.
/// 4. The value the computation completes with is returned without being
///    inspected.
///
/// A falsy value is retyped to the result container through `flatmap`,
/// which never calls its function on a falsy value.
///
/// # Panics
///
/// Panics if a value reports itself truthy but its `map` does not call the
/// function, which breaks the [`Monadic`] contract.
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::{Err, Ok, Result};
/// use rustymonad::effect::{Steps, run};
///
/// let visited = std::cell::Cell::new(0);
/// let program = Steps::new(|| Ok::<i32, &str>(1))
///     .bind(|_| Err("stop"))
///     .bind(|x| {
///         visited.set(visited.get() + 1);
///         Ok(x)
///     })
///     .finish(Ok);
///
/// assert_eq!(run(program), Err("stop"));
/// assert_eq!(visited.get(), 0);
/// ```
pub fn run<U, M, R, C>(mut computation: C) -> R
where
    M: Monadic<WithType<U> = R>,
    C: Suspendable<M, R>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!("do-notation started");

    let mut accumulator = match computation.start() {
        Step::Yield(value) => value,
        Step::Complete(value) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(steps = 0_usize, "do-notation completed");
            return value;
        }
    };

    #[cfg(feature = "tracing")]
    let mut bound_steps = 0_usize;

    loop {
        if !accumulator.is_truthy() {
            #[cfg(feature = "tracing")]
            tracing::debug!(steps = bound_steps, "do-notation short-circuited");
            return accumulator.flatmap::<U, _>(|_| unreachable!("falsy values never bind"));
        }

        let mut resumed = None;
        let _ = accumulator.map(|value| resumed = Some(computation.resume(value)));

        #[cfg(feature = "tracing")]
        {
            bound_steps += 1;
            tracing::trace!(step = bound_steps, "do-notation step bound");
        }

        match resumed {
            Some(Step::Yield(next)) => accumulator = next,
            Some(Step::Complete(result)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(steps = bound_steps, "do-notation completed");
                return result;
            }
            None => panic!("a truthy value did not pass its payload to `map`"),
        }
    }
}

/// Turns a computation builder into a function that runs it.
///
/// `build` is called once per invocation with the argument (a tuple when
/// several values are needed) and the resulting computation is driven by
/// [`run`].
///
/// # Panics
///
/// Panics under the same condition as [`run`].
///
/// # Examples
///
/// ```rust
/// use rustymonad::control::{Err, Ok, Result};
/// use rustymonad::effect::{Steps, do_notation};
///
/// fn safe_sqrt(x: f64) -> Result<f64, String> {
///     if x < 0.0 { Err("sqrt negative".to_string()) } else { Ok(x.sqrt()) }
/// }
///
/// fn safe_div(x: f64, y: f64) -> Result<f64, String> {
///     if y == 0.0 { Err("division by zero".to_string()) } else { Ok(x / y) }
/// }
///
/// let compute = do_notation(|(x, y): (f64, f64)| {
///     Steps::new(move || safe_sqrt(x))
///         .bind(move |root| safe_div(root, y))
///         .finish(Ok)
/// });
///
/// assert_eq!(compute((9.0, 2.0)), Ok(1.5));
/// assert_eq!(compute((9.0, 0.0)), Err("division by zero".to_string()));
/// assert_eq!(compute((-9.0, 2.0)), Err("sqrt negative".to_string()));
/// ```
pub fn do_notation<A, U, M, R, C, F>(build: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> C,
    C: Suspendable<M, R>,
    M: Monadic<WithType<U> = R>,
{
    move |argument| run::<U, M, R, C>(build(argument))
}

// =============================================================================
// Step Builder
// =============================================================================

type FirstStep<'a, M> = Box<dyn FnOnce() -> M + 'a>;
type NextStep<'a, M, R> = Box<dyn FnOnce(<M as TypeConstructor>::Inner) -> R + 'a>;

/// Builder for a [`Program`]: a first step, any number of binds and a
/// final step.
///
/// Every step except the last suspends on the value it returns; the value
/// returned by the closure passed to [`finish`](Steps::finish) completes the
/// program. The final step may change the payload type, as in
/// `.finish(|quotient| Ok(quotient.to_string()))`.
pub struct Steps<'a, M: Monadic> {
    first: FirstStep<'a, M>,
    binds: VecDeque<NextStep<'a, M, M>>,
}

impl<'a, M: Monadic> Steps<'a, M> {
    /// Starts a builder whose first suspension point is `first()`.
    #[must_use]
    pub fn new<F>(first: F) -> Self
    where
        F: FnOnce() -> M + 'a,
    {
        Self {
            first: Box::new(first),
            binds: VecDeque::new(),
        }
    }

    /// Appends a step that receives the previous inner value and suspends
    /// on the value it returns.
    #[must_use]
    pub fn bind<F>(mut self, step: F) -> Self
    where
        F: FnOnce(M::Inner) -> M + 'a,
    {
        self.binds.push_back(Box::new(step));
        self
    }

    /// Appends the final step and returns the runnable program.
    #[must_use]
    pub fn finish<R, F>(self, last: F) -> Program<'a, M, R>
    where
        F: FnOnce(M::Inner) -> R + 'a,
    {
        Program {
            first: core::option::Option::Some(self.first),
            binds: self.binds,
            last: core::option::Option::Some(Box::new(last)),
        }
    }
}

impl<M: Monadic> fmt::Debug for Steps<'_, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Steps")
            .field("binds", &self.binds.len())
            .finish_non_exhaustive()
    }
}

/// A [`Suspendable`] computation assembled by [`Steps`].
///
/// A program runs once: starting it twice, or resuming it after its last
/// step, panics.
pub struct Program<'a, M: Monadic, R = M> {
    first: core::option::Option<FirstStep<'a, M>>,
    binds: VecDeque<NextStep<'a, M, M>>,
    last: core::option::Option<NextStep<'a, M, R>>,
}

impl<M: Monadic, R> Program<'_, M, R> {
    /// Returns the number of steps that have not run yet.
    #[must_use]
    pub fn remaining_steps(&self) -> usize {
        self.binds.len() + usize::from(self.first.is_some()) + usize::from(self.last.is_some())
    }
}

impl<M: Monadic, R> Suspendable<M, R> for Program<'_, M, R> {
    fn start(&mut self) -> Step<M, R> {
        let core::option::Option::Some(first) = self.first.take() else {
            panic!("program has already been started");
        };
        Step::Yield(first())
    }

    fn resume(&mut self, value: M::Inner) -> Step<M, R> {
        if let core::option::Option::Some(step) = self.binds.pop_front() {
            return Step::Yield(step(value));
        }
        let core::option::Option::Some(last) = self.last.take() else {
            panic!("program resumed after its last step");
        };
        Step::Complete(last(value))
    }
}

impl<M: Monadic, R> fmt::Debug for Program<'_, M, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Program")
            .field("remaining_steps", &self.remaining_steps())
            .finish_non_exhaustive()
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::control::{Result, Some};
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn logs_completion_with_step_count() {
        let program = Steps::new(|| Some(1)).bind(|x| Some(x + 1)).finish(Some);
        assert_eq!(run(program), Some(2));
        assert!(logs_contain("do-notation started"));
        assert!(logs_contain("do-notation completed"));
        assert!(logs_contain("steps=2"));
    }

    #[traced_test]
    #[test]
    fn logs_short_circuit() {
        let program = Steps::new(|| Result::<i32, &str>::Ok(1))
            .bind(|_| Result::Err("halt"))
            .finish(Result::Ok);
        assert_eq!(run(program), Result::Err("halt"));
        assert!(logs_contain("do-notation short-circuited"));
        assert!(!logs_contain("do-notation completed"));
    }
}
