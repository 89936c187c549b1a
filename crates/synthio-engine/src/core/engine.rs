//! The calculator state machine
//!
//! [`EngineState`] is plain data. Every key press is a synchronous,
//! total transition; the only fallible path is
//! [`EngineState::try_apply_with`] under [`ZeroDivision::Reject`], which
//! leaves the state untouched when it fails.

use serde::{Deserialize, Serialize};

use crate::core::{
    format_result, CalcResult, Calculator, Digit, InputSymbol, Operation, ZeroDivision,
};

/// Most characters a user can type into the display
pub const MAX_INPUT_LEN: usize = 12;

const INITIAL_DISPLAY: &str = "0";

/// Whether the next digit starts a new operand or extends the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPhase {
    /// An operator, `=` or `%` was just pressed; the next digit replaces
    /// the display
    AwaitingOperand,
    /// Digits append to the display
    #[default]
    AccumulatingOperand,
}

/// A binary operation the engine just carried out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Left operand (the accumulator)
    pub lhs: f64,
    /// The operator that was pending
    pub operation: Operation,
    /// Right operand (the display)
    pub rhs: f64,
    /// Unformatted result
    pub result: f64,
}

impl Evaluation {
    /// Renders the operation as `lhs op rhs` with display formatting
    #[must_use]
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            format_result(self.lhs),
            self.operation.symbol(),
            format_result(self.rhs)
        )
    }
}

/// What a key press did to the state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// The state changed without evaluating anything
    Updated,
    /// The key had no effect
    Ignored,
    /// A pending operation was evaluated
    Evaluated(Evaluation),
}

/// Display and pending-operation state of one calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    display: String,
    accumulator: f64,
    pending: Option<Operation>,
    phase: EntryPhase,
    has_decimal_point: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// Creates the session-start state: `"0"`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            accumulator: 0.0,
            pending: None,
            phase: EntryPhase::AccumulatingOperand,
            has_decimal_point: false,
        }
    }

    /// Returns the text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the value carried from the prior operand
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Returns the operator waiting for its right-hand operand
    #[must_use]
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Returns the entry phase
    #[must_use]
    pub fn phase(&self) -> EntryPhase {
        self.phase
    }

    /// Returns true if the next digit starts a new operand
    #[must_use]
    pub fn is_awaiting_operand(&self) -> bool {
        self.phase == EntryPhase::AwaitingOperand
    }

    /// Returns true once the current operand has a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.has_decimal_point
    }

    /// Applies a key press with the default zero-division policy
    pub fn apply(&mut self, symbol: InputSymbol) -> Transition {
        // ZeroDivision::Zero has no failing path
        self.try_apply_with(symbol, ZeroDivision::Zero)
            .unwrap_or(Transition::Ignored)
    }

    /// Applies a key press, evaluating with the given zero-division policy
    pub fn try_apply_with(
        &mut self,
        symbol: InputSymbol,
        policy: ZeroDivision,
    ) -> CalcResult<Transition> {
        let calculator = Calculator::with_policy(policy);
        let transition = match symbol {
            InputSymbol::Clear => {
                *self = Self::new();
                Transition::Updated
            }
            InputSymbol::SignToggle => self.toggle_sign(),
            InputSymbol::Percent => self.percent(),
            InputSymbol::Operator(op) => self.operator(op, &calculator)?,
            InputSymbol::Equals => self.equals(&calculator)?,
            InputSymbol::DecimalPoint => self.decimal_point(),
            InputSymbol::Digit(digit) => self.digit(digit),
        };
        Ok(transition)
    }

    fn toggle_sign(&mut self) -> Transition {
        if self.display == INITIAL_DISPLAY {
            return Transition::Ignored;
        }
        match self.display.strip_prefix('-') {
            Some(magnitude) => self.display = magnitude.to_string(),
            None => self.display.insert(0, '-'),
        }
        Transition::Updated
    }

    fn percent(&mut self) -> Transition {
        let Some(value) = self.parse_display() else {
            return Transition::Ignored;
        };
        self.set_result(value / 100.0);
        self.phase = EntryPhase::AwaitingOperand;
        Transition::Updated
    }

    fn operator(&mut self, op: Operation, calculator: &Calculator) -> CalcResult<Transition> {
        let Some(current) = self.parse_display() else {
            return Ok(Transition::Ignored);
        };

        let transition = match self.pending {
            // An operand was entered since the last operator: chain left to right
            Some(pending) if self.phase == EntryPhase::AccumulatingOperand => {
                let evaluation = self.evaluate(current, pending, calculator)?;
                self.display = format_result(evaluation.result);
                self.accumulator = evaluation.result;
                Transition::Evaluated(evaluation)
            }
            _ => {
                self.accumulator = current;
                Transition::Updated
            }
        };

        self.pending = Some(op);
        self.phase = EntryPhase::AwaitingOperand;
        self.has_decimal_point = false;
        Ok(transition)
    }

    fn equals(&mut self, calculator: &Calculator) -> CalcResult<Transition> {
        let Some(pending) = self.pending else {
            return Ok(Transition::Ignored);
        };
        let Some(current) = self.parse_display() else {
            return Ok(Transition::Ignored);
        };

        let evaluation = self.evaluate(current, pending, calculator)?;
        self.set_result(evaluation.result);
        self.accumulator = evaluation.result;
        self.pending = None;
        self.phase = EntryPhase::AwaitingOperand;
        Ok(Transition::Evaluated(evaluation))
    }

    fn decimal_point(&mut self) -> Transition {
        if self.phase == EntryPhase::AwaitingOperand {
            self.display = "0.".to_string();
            self.phase = EntryPhase::AccumulatingOperand;
            self.has_decimal_point = true;
            return Transition::Updated;
        }
        if self.has_decimal_point {
            return Transition::Ignored;
        }
        self.display.push('.');
        self.has_decimal_point = true;
        Transition::Updated
    }

    fn digit(&mut self, digit: Digit) -> Transition {
        if self.phase == EntryPhase::AwaitingOperand {
            self.display = digit.to_string();
            self.phase = EntryPhase::AccumulatingOperand;
            self.has_decimal_point = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = digit.to_string();
        } else if self.display.len() < MAX_INPUT_LEN {
            self.display.push(digit.as_char());
        } else {
            tracing::trace!(display = %self.display, "display full, digit dropped");
            return Transition::Ignored;
        }
        Transition::Updated
    }

    fn evaluate(
        &self,
        rhs: f64,
        operation: Operation,
        calculator: &Calculator,
    ) -> CalcResult<Evaluation> {
        let result = calculator.calculate(self.accumulator, rhs, operation)?;
        Ok(Evaluation {
            lhs: self.accumulator,
            operation,
            rhs,
            result,
        })
    }

    /// Shows a computed value and re-derives the decimal flag from it
    fn set_result(&mut self, value: f64) {
        self.display = format_result(value);
        self.has_decimal_point = self.display.contains('.');
    }

    fn parse_display(&self) -> Option<f64> {
        self.display.parse().ok()
    }
}

/// Returns a fresh session-start state
#[must_use]
pub fn reset() -> EngineState {
    EngineState::new()
}

/// Applies one key press and returns the resulting state
#[must_use]
pub fn apply(mut state: EngineState, symbol: InputSymbol) -> EngineState {
    state.apply(symbol);
    state
}

/// Returns the text a presentation layer should render
#[must_use]
pub fn current_display(state: &EngineState) -> &str {
    state.display()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    fn d(value: u8) -> InputSymbol {
        InputSymbol::digit(value).unwrap()
    }

    const ADD: InputSymbol = InputSymbol::Operator(Operation::Add);
    const SUB: InputSymbol = InputSymbol::Operator(Operation::Subtract);
    const MUL: InputSymbol = InputSymbol::Operator(Operation::Multiply);
    const DIV: InputSymbol = InputSymbol::Operator(Operation::Divide);

    fn run(symbols: &[InputSymbol]) -> EngineState {
        symbols.iter().fold(reset(), |state, s| apply(state, *s))
    }

    // ===== Initial state =====

    #[test]
    fn test_initial_state() {
        let state = reset();
        assert_eq!(current_display(&state), "0");
        assert_eq!(state.accumulator(), 0.0);
        assert_eq!(state.pending(), None);
        assert_eq!(state.phase(), EntryPhase::AccumulatingOperand);
        assert!(!state.has_decimal_point());
        assert_eq!(state, EngineState::default());
    }

    // ===== Digits =====

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(run(&[d(1), d(2), d(3)]).display(), "123");
    }

    #[test]
    fn test_leading_zero_suppressed() {
        assert_eq!(run(&[d(0), d(0), d(7)]).display(), "7");
    }

    #[test]
    fn test_digit_cap_at_twelve() {
        let keys: Vec<_> = (0..15).map(|i| d(1 + i % 9)).collect();
        let state = run(&keys);
        assert_eq!(state.display(), "123456789123");
        assert_eq!(state.display().len(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_digit_cap_counts_sign_and_point() {
        let mut state = run(&[d(1), InputSymbol::DecimalPoint]);
        state.apply(InputSymbol::SignToggle);
        for _ in 0..20 {
            state.apply(d(5));
        }
        assert_eq!(state.display(), "-1.555555555");
        assert_eq!(state.apply(d(5)), Transition::Ignored);
    }

    #[test]
    fn test_digit_after_operator_replaces_display() {
        let state = run(&[d(4), d(2), ADD, d(7)]);
        assert_eq!(state.display(), "7");
        assert_eq!(state.accumulator(), 42.0);
        assert_eq!(state.phase(), EntryPhase::AccumulatingOperand);
    }

    // ===== Decimal point =====

    #[test]
    fn test_decimal_point_appends_once() {
        let state = run(&[d(1), InputSymbol::DecimalPoint, d(5)]);
        assert_eq!(state.display(), "1.5");
        assert!(state.has_decimal_point());
    }

    #[test]
    fn test_decimal_point_on_initial_zero() {
        assert_eq!(run(&[InputSymbol::DecimalPoint, d(2)]).display(), "0.2");
    }

    #[test]
    fn test_second_decimal_point_ignored() {
        let mut state = run(&[d(1), InputSymbol::DecimalPoint]);
        let before = state.clone();
        assert_eq!(state.apply(InputSymbol::DecimalPoint), Transition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_decimal_point_after_operator_starts_fresh() {
        let state = run(&[d(3), ADD, InputSymbol::DecimalPoint]);
        assert_eq!(state.display(), "0.");
        assert!(state.has_decimal_point());
        assert!(!state.is_awaiting_operand());
    }

    #[test]
    fn test_operator_clears_decimal_flag() {
        let state = run(&[d(1), InputSymbol::DecimalPoint, d(5), ADD]);
        assert!(!state.has_decimal_point());
        assert!(state.is_awaiting_operand());
    }

    // ===== Sign toggle =====

    #[test]
    fn test_sign_toggle_round_trip() {
        let state = run(&[d(9), InputSymbol::SignToggle]);
        assert_eq!(state.display(), "-9");
        assert_eq!(apply(state, InputSymbol::SignToggle).display(), "9");
    }

    #[test]
    fn test_sign_toggle_noop_on_zero() {
        let mut state = reset();
        assert_eq!(state.apply(InputSymbol::SignToggle), Transition::Ignored);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_sign_toggle_on_zero_point() {
        let state = run(&[InputSymbol::DecimalPoint, InputSymbol::SignToggle]);
        assert_eq!(state.display(), "-0.");
    }

    #[test]
    fn test_negative_operand_used_in_evaluation() {
        let state = run(&[d(5), InputSymbol::SignToggle, ADD, d(2), InputSymbol::Equals]);
        assert_eq!(state.display(), "-3");
    }

    // ===== Percent =====

    #[test]
    fn test_percent() {
        let state = run(&[d(5), InputSymbol::Percent]);
        assert_eq!(state.display(), "0.05");
        assert!(state.has_decimal_point());
        assert!(state.is_awaiting_operand());
    }

    #[test]
    fn test_percent_integral_result_has_no_point() {
        let state = run(&[d(2), d(0), d(0), InputSymbol::Percent]);
        assert_eq!(state.display(), "2");
        assert!(!state.has_decimal_point());
    }

    #[test]
    fn test_digit_after_percent_replaces_display() {
        let state = run(&[d(5), InputSymbol::Percent, d(8)]);
        assert_eq!(state.display(), "8");
    }

    #[test]
    fn test_percent_keeps_pending_operator() {
        let state = run(&[d(2), d(0), d(0), ADD, d(1), d(0), InputSymbol::Percent]);
        assert_eq!(state.display(), "0.1");
        assert_eq!(state.pending(), Some(Operation::Add));
        // Awaiting, so `=` evaluates 200 + 0.1
        assert_eq!(apply(state, InputSymbol::Equals).display(), "200.1");
    }

    // ===== Operators and equals =====

    #[test]
    fn test_one_plus_one() {
        assert_eq!(run(&[d(1), ADD, d(1), InputSymbol::Equals]).display(), "2");
    }

    #[test]
    fn test_two_times_three() {
        assert_eq!(run(&[d(2), MUL, d(3), InputSymbol::Equals]).display(), "6");
    }

    #[test]
    fn test_subtract() {
        assert_eq!(run(&[d(3), SUB, d(8), InputSymbol::Equals]).display(), "-5");
    }

    #[test]
    fn test_divide_to_fraction() {
        assert_eq!(
            run(&[d(1), DIV, d(3), InputSymbol::Equals]).display(),
            "0.333333"
        );
    }

    #[test]
    fn test_divide_by_zero_displays_zero() {
        let state = run(&[d(1), DIV, d(0), InputSymbol::Equals]);
        assert_eq!(state.display(), "0");
        assert_eq!(state.accumulator(), 0.0);
    }

    #[test]
    fn test_chained_operations_left_to_right() {
        let mut state = run(&[d(2), ADD, d(3), MUL]);
        assert_eq!(state.display(), "5");
        assert_eq!(state.accumulator(), 5.0);
        state = run(&[d(2), ADD, d(3), MUL, d(4), InputSymbol::Equals]);
        assert_eq!(state.display(), "20");
    }

    #[test]
    fn test_chained_operator_reports_evaluation() {
        let mut state = run(&[d(2), ADD, d(3)]);
        let transition = state.apply(MUL);
        let Transition::Evaluated(evaluation) = transition else {
            panic!("expected an evaluation, got {transition:?}");
        };
        assert_eq!(evaluation.result, 5.0);
        assert_eq!(evaluation.expression(), "2 + 3");
    }

    #[test]
    fn test_repeated_operator_replaces_pending() {
        let state = run(&[d(6), ADD, MUL, d(2), InputSymbol::Equals]);
        assert_eq!(state.display(), "12");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut state = run(&[d(7)]);
        let before = state.clone();
        assert_eq!(state.apply(InputSymbol::Equals), Transition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_equals_clears_pending() {
        let state = run(&[d(1), ADD, d(1), InputSymbol::Equals]);
        assert_eq!(state.pending(), None);
        assert_eq!(state.accumulator(), 2.0);
        assert!(state.is_awaiting_operand());
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        let state = run(&[d(1), ADD, d(1), InputSymbol::Equals, InputSymbol::Equals]);
        assert_eq!(state.display(), "2");
    }

    #[test]
    fn test_equals_right_after_operator_reuses_display() {
        assert_eq!(run(&[d(5), ADD, InputSymbol::Equals]).display(), "10");
    }

    #[test]
    fn test_equals_recomputes_decimal_flag() {
        let state = run(&[d(1), DIV, d(4), InputSymbol::Equals]);
        assert_eq!(state.display(), "0.25");
        assert!(state.has_decimal_point());
    }

    #[test]
    fn test_large_result_goes_scientific() {
        let state = run(&[
            d(1),
            d(0),
            d(0),
            d(0),
            d(0),
            d(0),
            MUL,
            d(1),
            d(0),
            d(0),
            d(0),
            d(0),
            InputSymbol::Equals,
        ]);
        assert_eq!(state.display(), "1.00e+09");
    }

    #[test]
    fn test_scientific_display_feeds_next_operation() {
        let state = run(&[
            d(1),
            d(0),
            d(0),
            d(0),
            d(0),
            d(0),
            MUL,
            d(1),
            d(0),
            d(0),
            d(0),
            d(0),
            InputSymbol::Equals,
            DIV,
            d(1),
            d(0),
            InputSymbol::Equals,
        ]);
        assert_eq!(state.display(), "100000000");
    }

    #[test]
    fn test_result_after_equals_starts_new_operand() {
        let state = run(&[d(1), ADD, d(1), InputSymbol::Equals, d(9)]);
        assert_eq!(state.display(), "9");
        assert_eq!(state.pending(), None);
    }

    // ===== Clear =====

    #[test]
    fn test_clear_restores_initial_state() {
        let state = run(&[d(8), MUL, d(3), InputSymbol::DecimalPoint, InputSymbol::Clear]);
        assert_eq!(state, reset());
    }

    // ===== Zero-division policy =====

    #[test]
    fn test_reject_policy_leaves_state_untouched() {
        let mut state = run(&[d(1), DIV, d(0)]);
        let before = state.clone();
        assert_eq!(
            state.try_apply_with(InputSymbol::Equals, ZeroDivision::Reject),
            Err(CalcError::UndefinedResult)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_reject_policy_on_chained_operator() {
        let mut state = run(&[d(1), DIV, d(0)]);
        assert_eq!(
            state.try_apply_with(ADD, ZeroDivision::Reject),
            Err(CalcError::UndefinedResult)
        );
        assert_eq!(state.pending(), Some(Operation::Divide));
    }

    #[test]
    fn test_reject_policy_allows_other_inputs() {
        let mut state = reset();
        for symbol in [d(8), DIV, d(2), InputSymbol::Equals] {
            state.try_apply_with(symbol, ZeroDivision::Reject).unwrap();
        }
        assert_eq!(state.display(), "4");
    }

    // ===== Serialization =====

    #[test]
    fn test_state_serializes_phase_snake_case() {
        let state = run(&[d(3), ADD]);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"awaiting_operand\""));
        assert!(json.contains("\"add\""));
    }
}
