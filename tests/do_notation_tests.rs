//! Tests for the do-notation engine.
//!
//! Covers hand-written suspendable state machines, programs assembled with
//! `Steps`, the `do_notation` function adapter, and the equivalence between
//! driving a computation with the engine and nesting `and_then` calls.

#![cfg(feature = "effect")]

use rustymonad::control::{Err, Nothing, Ok, Option, Result, Some};
use rustymonad::effect::{Step, Steps, Suspendable, do_notation, run};
use rustymonad::typeclass::Monad;
use rstest::rstest;
use std::cell::{Cell, RefCell};

fn safe_sqrt(x: f64) -> Result<f64, String> {
    if x < 0.0 {
        Err("sqrt negative".to_string())
    } else {
        Ok(x.sqrt())
    }
}

fn safe_div(x: f64, y: f64) -> Result<f64, String> {
    if y == 0.0 {
        Err("division by zero".to_string())
    } else {
        Ok(x / y)
    }
}

// =============================================================================
// Hand-Written State Machines
// =============================================================================

/// Takes a square root, divides by `divisor`, then completes with the
/// quotient.
struct SqrtThenDivide {
    value: f64,
    divisor: f64,
    state: u8,
}

impl SqrtThenDivide {
    const fn new(value: f64, divisor: f64) -> Self {
        Self {
            value,
            divisor,
            state: 0,
        }
    }
}

impl Suspendable<Result<f64, String>> for SqrtThenDivide {
    fn start(&mut self) -> Step<Result<f64, String>> {
        self.state = 1;
        Step::Yield(safe_sqrt(self.value))
    }

    fn resume(&mut self, value: f64) -> Step<Result<f64, String>> {
        match self.state {
            1 => {
                self.state = 2;
                Step::Yield(safe_div(value, self.divisor))
            }
            _ => Step::Complete(Ok(value)),
        }
    }
}

#[rstest]
#[case(9.0, 2.0, Ok(1.5))]
#[case(9.0, 0.0, Err("division by zero".to_string()))]
#[case(-9.0, 2.0, Err("sqrt negative".to_string()))]
fn state_machine_sequences_results(
    #[case] value: f64,
    #[case] divisor: f64,
    #[case] expected: Result<f64, String>,
) {
    assert_eq!(run(SqrtThenDivide::new(value, divisor)), expected);
}

/// Records every value it is resumed with.
struct Recorder<'a> {
    inputs: Vec<Option<i32>>,
    seen: &'a RefCell<Vec<i32>>,
}

impl Suspendable<Option<i32>> for Recorder<'_> {
    fn start(&mut self) -> Step<Option<i32>> {
        self.inputs.reverse();
        self.next_step()
    }

    fn resume(&mut self, value: i32) -> Step<Option<i32>> {
        self.seen.borrow_mut().push(value);
        self.next_step()
    }
}

impl Recorder<'_> {
    fn next_step(&mut self) -> Step<Option<i32>> {
        match self.inputs.pop() {
            std::option::Option::Some(value) => Step::Yield(value),
            std::option::Option::None => Step::Complete(Some(-1)),
        }
    }
}

#[rstest]
fn engine_feeds_each_inner_value_back() {
    let seen = RefCell::new(Vec::new());
    let recorder = Recorder {
        inputs: vec![Some(1), Some(2), Some(3)],
        seen: &seen,
    };
    assert_eq!(run(recorder), Some(-1));
    assert_eq!(*seen.borrow(), vec![1, 2, 3]);
}

#[rstest]
fn engine_stops_at_first_nothing() {
    let seen = RefCell::new(Vec::new());
    let recorder = Recorder {
        inputs: vec![Some(1), Nothing, Some(3)],
        seen: &seen,
    };
    assert_eq!(run(recorder), Nothing);
    assert_eq!(*seen.borrow(), vec![1]);
}

#[rstest]
fn engine_drives_base_monad() {
    let program = Steps::new(|| Monad::new(2))
        .bind(|x| Monad::new(x * 10))
        .finish(|x| Monad::new(x + 1));
    assert_eq!(run(program), Monad::new(21));
}

// =============================================================================
// Steps Builder
// =============================================================================

#[rstest]
fn steps_short_circuit_skips_later_steps() {
    let calls = Cell::new(0);
    let program = Steps::new(|| Ok::<i32, &str>(1))
        .bind(|x| Ok(x + 1))
        .bind(|_| Err("halt"))
        .bind(|x| {
            calls.set(calls.get() + 1);
            Ok(x)
        })
        .finish(|x| {
            calls.set(calls.get() + 1);
            Ok(x)
        });
    assert_eq!(run(program), Err("halt"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn steps_final_value_is_returned_as_is() {
    let program = Steps::new(|| Ok::<i32, &str>(1)).finish(|_| Err::<i32, &str>("final"));
    assert_eq!(run(program), Err("final"));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(50)]
fn engine_matches_nested_and_then(#[case] length: usize) {
    let step = |x: i64| -> Result<i64, String> {
        if x > 1_000 {
            Err(format!("overflow at {x}"))
        } else {
            Ok(x * 2 + 1)
        }
    };

    let mut steps = Steps::new(|| Ok::<i64, String>(1));
    for _ in 0..length {
        steps = steps.bind(step);
    }
    let engine = run(steps.finish(Ok));

    let nested = (0..length).fold(Ok::<i64, String>(1), |accumulated, _| {
        accumulated.and_then(step)
    });

    assert_eq!(engine, nested);
}

// =============================================================================
// Changing the Payload Type
// =============================================================================

#[rstest]
#[case(9.0, 2.0, Ok("1.5".to_string()))]
#[case(9.0, 0.0, Err("division by zero".to_string()))]
#[case(-9.0, 2.0, Err("sqrt negative".to_string()))]
fn final_step_formats_quotient(
    #[case] value: f64,
    #[case] divisor: f64,
    #[case] expected: Result<String, String>,
) {
    let program = Steps::new(|| safe_sqrt(value))
        .bind(|root| safe_div(root, divisor))
        .finish(|quotient| Ok(quotient.to_string()));
    assert_eq!(run(program), expected);
}

#[rstest]
fn final_step_matches_nested_and_then() {
    let nested = safe_sqrt(16.0)
        .and_then(|root| safe_div(root, 8.0))
        .and_then(|quotient| Ok::<String, String>(format!("{quotient:.2}")));
    let program = Steps::new(|| safe_sqrt(16.0))
        .bind(|root| safe_div(root, 8.0))
        .finish(|quotient| Ok(format!("{quotient:.2}")));
    assert_eq!(run(program), nested);
    assert_eq!(nested, Ok("0.50".to_string()));
}

fn parse_id(text: &str) -> Result<u32, String> {
    text.parse::<u32>().map_err(|_| format!("not an id: {text}")).into()
}

fn lookup_name(id: u32) -> Result<String, String> {
    match id {
        1 => Ok("root".to_string()),
        7 => Ok("guest".to_string()),
        _ => Err(format!("unknown id {id}")),
    }
}

/// Parses an id, then completes with the name registered for it.
struct ParseThenLookup<'a> {
    text: &'a str,
}

impl Suspendable<Result<u32, String>, Result<String, String>> for ParseThenLookup<'_> {
    fn start(&mut self) -> Step<Result<u32, String>, Result<String, String>> {
        Step::Yield(parse_id(self.text))
    }

    fn resume(&mut self, id: u32) -> Step<Result<u32, String>, Result<String, String>> {
        Step::Complete(lookup_name(id))
    }
}

#[rstest]
#[case("7", Ok("guest".to_string()))]
#[case("3", Err("unknown id 3".to_string()))]
#[case("seven", Err("not an id: seven".to_string()))]
fn state_machine_completes_with_other_payload(
    #[case] text: &str,
    #[case] expected: Result<String, String>,
) {
    let outcome = run(ParseThenLookup { text });
    assert_eq!(outcome, expected);
    assert_eq!(parse_id(text).and_then(lookup_name), expected);
}

#[rstest]
fn short_circuit_is_retyped_for_the_result() {
    let visited = Cell::new(false);
    let program = Steps::new(|| Nothing::<i32>).finish(|value| {
        visited.set(true);
        Some(value.to_string())
    });
    let outcome: Option<String> = run(program);
    assert_eq!(outcome, Nothing);
    assert!(!visited.get());
}

// =============================================================================
// Function Adapter
// =============================================================================

#[rstest]
#[case((9.0, 2.0), Ok(1.5))]
#[case((9.0, 0.0), Err("division by zero".to_string()))]
#[case((-9.0, 2.0), Err("sqrt negative".to_string()))]
fn do_notation_adapts_builder(
    #[case] arguments: (f64, f64),
    #[case] expected: Result<f64, String>,
) {
    let compute = do_notation(|(x, y): (f64, f64)| {
        Steps::new(move || safe_sqrt(x))
            .bind(move |root| safe_div(root, y))
            .finish(Ok)
    });
    assert_eq!(compute(arguments), expected);
}

#[rstest]
fn do_notation_changes_payload_type() {
    let describe = do_notation(|text: &'static str| ParseThenLookup { text });
    assert_eq!(describe("1"), Ok("root".to_string()));
    assert_eq!(describe("x"), Err("not an id: x".to_string()));
}

#[rstest]
fn do_notation_accepts_state_machines() {
    let compute =
        do_notation(|(value, divisor): (f64, f64)| SqrtThenDivide::new(value, divisor));
    assert_eq!(compute((16.0, 4.0)), Ok(1.0));
    assert_eq!(compute((16.0, 0.0)), Err("division by zero".to_string()));
}

#[rstest]
fn do_notation_builds_a_fresh_computation_per_call() {
    let built = Cell::new(0);
    let lookup = do_notation(|key: &str| {
        built.set(built.get() + 1);
        let key = key.to_string();
        Steps::new(move || if key.is_empty() { Nothing } else { Some(key.len()) }).finish(Some)
    });
    assert_eq!(lookup("abc"), Some(3));
    assert_eq!(lookup(""), Nothing);
    assert_eq!(built.get(), 2);
}
