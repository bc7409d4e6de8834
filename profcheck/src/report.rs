use serde::Serialize;

use crate::io::{CliWriter, OutputType, Style};
use crate::validation::{FailureMode, Report};

pub const SUCCESS_MESSAGE: &'static str = "All profiles are valid!";

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ErrorOut {
    pub file: String,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ReportOut {
    pub checked: usize,
    pub errors: Vec<ErrorOut>,
}

impl From<&Report> for ReportOut {
    fn from(report: &Report) -> ReportOut {
        ReportOut {
            checked: report.checked,
            errors: report
                .errors
                .iter()
                .map(|err| ErrorOut {
                    file: err.file(),
                    kind: err.kind(),
                    message: err.to_string(),
                })
                .collect(),
        }
    }
}

pub fn print_json(report: &Report, writer: &mut impl CliWriter) -> serde_json::Result<()> {
    let out = JsonOut {
        ok: report.is_valid(),
        data: ReportOut::from(report),
    };
    writer.writeln(serde_json::to_string_pretty(&out)?, OutputType::Standard);
    Ok(())
}

pub fn print_plain(report: &Report, mode: FailureMode, writer: &mut impl CliWriter) {
    if report.is_valid() {
        writer.writeln(SUCCESS_MESSAGE, OutputType::Standard);
        return;
    }

    for err in &report.errors {
        writer.writeln(
            format!("{} {}", Style::error("error:"), err),
            OutputType::Error,
        );
    }

    match mode {
        FailureMode::FailFast if report.checked > 0 => writer.writeln(
            Style::warning("remaining profiles were not checked, use --keep-going to check them all"),
            OutputType::Error,
        ),
        FailureMode::FailFast => {}
        FailureMode::CollectAll => writer.writeln(
            Style::bold(format!(
                "{} invalid profile(s), {} checked",
                report.errors.len(),
                report.checked
            )),
            OutputType::Error,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use crate::io::CursorOutput;

    fn failing_report() -> Report {
        Report {
            checked: 2,
            errors: vec![ProfileError::MissingField {
                file: "dave.json".to_string(),
                field: "bio".to_string(),
            }],
        }
    }

    #[test]
    fn test_print_plain_success_is_single_line() {
        let mut output = CursorOutput::new();
        print_plain(&Report::default(), FailureMode::FailFast, &mut output);
        assert_eq!("All profiles are valid!\n", output.standard_as_string());
        assert_eq!("", output.error_as_string());
    }

    #[test]
    fn test_print_plain_failure_goes_to_stderr() {
        let mut output = CursorOutput::new();
        print_plain(&failing_report(), FailureMode::CollectAll, &mut output);
        assert_eq!("", output.standard_as_string());
        let errors = output.error_as_string();
        assert!(errors.contains("dave.json: missing required field `bio`"));
        assert!(errors.contains("1 invalid profile(s), 2 checked"));
    }

    #[test]
    fn test_report_out_lists_errors() {
        let out = ReportOut::from(&failing_report());
        assert_eq!(2, out.checked);
        assert_eq!(
            vec![ErrorOut {
                file: "dave.json".to_string(),
                kind: "missing_field",
                message: "dave.json: missing required field `bio`".to_string(),
            }],
            out.errors
        );
    }

    #[test]
    fn test_print_json_shape() {
        let mut output = CursorOutput::new();
        print_json(&failing_report(), &mut output).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&output.standard_as_string()).unwrap();
        assert_eq!(false, value["ok"]);
        assert_eq!(2, value["data"]["checked"]);
        assert_eq!("dave.json", value["data"]["errors"][0]["file"]);
        assert_eq!("missing_field", value["data"]["errors"][0]["kind"]);
    }
}
