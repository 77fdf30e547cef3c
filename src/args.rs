//! Command-line parsing.
//!
//! The only input is an optional list of file names; without one the built-in list is used.
//! There are no options besides `--help`, which is handled in [`crate::help`] before we get here.

use std::ffi::{OsStr, OsString};

use crate::{error::FitError, fj_err, plan::ExecutionPlan};

pub fn parse_args(args: Vec<OsString>) -> Result<ExecutionPlan, FitError> {
    let files: Vec<OsString> = args.into_iter().skip(1).collect(); // skip argv[0], path to our binary
    if files.is_empty() {
        return Ok(ExecutionPlan::default());
    }

    let mut plan = ExecutionPlan::new(std::iter::empty::<String>());
    for raw_arg in files {
        if starts_with_sign(&raw_arg) {
            return Err(fj_err!(
                "unrecognized option `{}'",
                raw_arg.to_string_lossy()
            ));
        }
        let file = raw_arg
            .into_string()
            .map_err(|s| fj_err!("file name is not valid UTF-8: {}", s.to_string_lossy()))?;
        plan.add_input_file(file);
    }
    Ok(plan)
}

/// Checks if the string starts with a `-` or a `+`
fn starts_with_sign(arg: &OsStr) -> bool {
    matches!(arg.as_encoded_bytes().first(), Some(b'-' | b'+'))
}
