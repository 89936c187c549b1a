//! Eval command handler

use std::io::Write;

use synthio_engine::keypad::Keypad;
use synthio_engine::session::Session;

use crate::commands::EvalArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{EvalReport, Step};

use super::press_key;

/// Presses every key in `keys` on a fresh session.
///
/// Each argument is tokenized like typed input. A rejected division shows
/// the error indicator and keeps going, like the watch does; an unknown
/// key aborts.
pub fn evaluate(config: &CliConfig, keys: &[String], record_steps: bool) -> CliResult<EvalReport> {
    let mut session = Session::with_config(config.engine.clone());
    let mut steps = Vec::new();

    for key in keys.iter().flat_map(|arg| Keypad::tokenize(arg)) {
        press_key(&mut session, key)?;
        if record_steps {
            steps.push(Step {
                key: key.to_string(),
                display: session.display().to_string(),
            });
        }
    }

    Ok(EvalReport {
        display: session.display().to_string(),
        steps,
        history: session.history().iter().cloned().collect(),
    })
}

/// Execute the eval command
pub fn execute_eval<W: Write>(config: &CliConfig, args: &EvalArgs, out: &mut W) -> CliResult<()> {
    let report = evaluate(config, &args.keys, args.steps)?;
    let rendered = report.render(args.format.into(), config.color.should_color())?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::FormatArg;
    use crate::config::ColorChoice;
    use crate::error::CliError;
    use synthio_engine::core::{CalcError, ZeroDivision};

    fn keys(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    fn plain() -> CliConfig {
        CliConfig::new().with_color(ColorChoice::Never)
    }

    #[test]
    fn test_evaluate_single_argument() {
        let report = evaluate(&plain(), &keys(&["2 + 3 × 4 ="]), false).unwrap();
        assert_eq!(report.display, "20");
        assert!(report.steps.is_empty());
        assert_eq!(report.history.len(), 2);
    }

    #[test]
    fn test_evaluate_split_arguments() {
        let report = evaluate(&plain(), &keys(&["12", "*", "2", "="]), false).unwrap();
        assert_eq!(report.display, "24");
    }

    #[test]
    fn test_evaluate_records_steps() {
        let report = evaluate(&plain(), &keys(&["5%"]), true).unwrap();
        let steps: Vec<_> = report
            .steps
            .iter()
            .map(|s| (s.key.as_str(), s.display.as_str()))
            .collect();
        assert_eq!(steps, [("5", "5"), ("%", "0.05")]);
    }

    #[test]
    fn test_evaluate_unknown_key() {
        let err = evaluate(&plain(), &keys(&["2^3"]), false).unwrap_err();
        assert!(matches!(err, CliError::Calc(CalcError::InvalidInput(_))));
    }

    #[test]
    fn test_evaluate_division_by_zero_defaults_to_zero() {
        let report = evaluate(&plain(), &keys(&["1/0="]), false).unwrap();
        assert_eq!(report.display, "0");
    }

    #[test]
    fn test_evaluate_division_by_zero_rejected() {
        let config = plain().with_zero_division(ZeroDivision::Reject);
        let report = evaluate(&config, &keys(&["1/0="]), true).unwrap();
        assert_eq!(report.display, "Error");
        assert!(report.history.is_empty());

        // The next key starts over
        let report = evaluate(&config, &keys(&["1/0= 7"]), false).unwrap();
        assert_eq!(report.display, "7");
    }

    #[test]
    fn test_execute_eval_text() {
        let args = EvalArgs {
            keys: keys(&["9 ±"]),
            steps: false,
            format: FormatArg::Text,
        };
        let mut out = Vec::new();
        execute_eval(&plain(), &args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-9\n");
    }

    #[test]
    fn test_execute_eval_json() {
        let args = EvalArgs {
            keys: keys(&["1+1="]),
            steps: true,
            format: FormatArg::Json,
        };
        let mut out = Vec::new();
        execute_eval(&plain(), &args, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["display"], "2");
        assert_eq!(value["steps"].as_array().unwrap().len(), 4);
        assert_eq!(value["history"][0]["expression"], "1 + 1");
    }
}
