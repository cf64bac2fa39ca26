// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process::ExitCode;

use stutter_core::DocumentLoadError;

/// Process exit codes. The argument, read and memory codes are `-1`, `-2` and `-3`
/// truncated to a byte.
pub mod exit_code_values {
    pub const SUCCESS: u8 = 0;
    pub const OUTPUT_FAILURE: u8 = 1;
    pub const ALLOCATION_FAILURE: u8 = 253;
    pub const READ_FAILURE: u8 = 254;
    pub const INVALID_ARGS: u8 = 255;
}

/// Map an error that stopped the app to its exit code. Errors that didn't come from
/// loading the document are output failures.
#[must_use]
pub fn exit_code_for_report(report: &miette::Report) -> u8 {
    match report.downcast_ref::<DocumentLoadError>() {
        Some(DocumentLoadError::NotFound { .. } | DocumentLoadError::ReadFailure { .. }) => {
            exit_code_values::READ_FAILURE
        }
        Some(DocumentLoadError::AllocationFailure { .. }) => {
            exit_code_values::ALLOCATION_FAILURE
        }
        None => exit_code_values::OUTPUT_FAILURE,
    }
}

/// Help and version requests are reported by clap as errors, but they are not failures.
#[must_use]
pub fn exit_code_for_clap_error(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::from(exit_code_values::INVALID_ARGS)
    } else {
        ExitCode::from(exit_code_values::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_errors() {
        let report = miette::Report::new(DocumentLoadError::NotFound {
            path: "a.txt".into(),
        });
        assert_eq!(exit_code_for_report(&report), 254);

        let report = miette::Report::new(DocumentLoadError::ReadFailure {
            path: "a.txt".into(),
            source: std::io::Error::other("boom"),
        });
        assert_eq!(exit_code_for_report(&report), 254);

        let report = miette::Report::new(DocumentLoadError::AllocationFailure {
            path: "a.txt".into(),
            requested: usize::MAX,
        });
        assert_eq!(exit_code_for_report(&report), 253);
    }

    #[test]
    fn test_other_errors() {
        let report = miette::miette!("broken pipe");
        assert_eq!(exit_code_for_report(&report), 1);
    }
}
