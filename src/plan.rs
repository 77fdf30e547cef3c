use std::{io::Write, path::Path};

use image::Rgb;
use tracing::{debug, warn};

use crate::decode::decode;
use crate::operations::{Operation, TargetSize};
use crate::utils::filename::output_name;
use crate::{encode, error::FitError};

/// Every output is stretched to exactly this size
pub const TARGET_SIZE: TargetSize = TargetSize {
    width: 640,
    height: 400,
};
pub const JPEG_QUALITY: u8 = 95;
/// Transparent areas are composited onto this color
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
/// Processed when no files are given on the command line
pub const DEFAULT_INPUT_FILES: [&str; 2] = ["g1.jpeg", "g2.jpeg"];

/// Plan of operations for the whole run over multiple files
#[derive(Debug)]
pub struct ExecutionPlan {
    /// Operations applied to every input file, in order
    ops: Vec<Operation>,
    input_files: Vec<FilePlan>,
    modifiers: Modifiers,
}

/// Input and derived output of a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Modifiers {
    pub quality: u8,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            quality: JPEG_QUALITY,
        }
    }
}

/// What happened to a single file. Never aggregated: each file stands on its own.
#[derive(Debug)]
pub enum FileOutcome {
    NotFound,
    Converted,
    Failed(FitError),
}

impl Default for ExecutionPlan {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FILES)
    }
}

impl ExecutionPlan {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut plan = Self {
            ops: vec![
                Operation::Flatten(BACKGROUND),
                Operation::Resize(TARGET_SIZE),
            ],
            input_files: Vec::new(),
            modifiers: Modifiers::default(),
        };
        for file in files {
            plan.add_input_file(file.into());
        }
        plan
    }

    pub fn add_input_file(&mut self, input: String) {
        let output = output_name(&input, TARGET_SIZE);
        self.input_files.push(FilePlan { input, output });
    }

    pub fn input_files(&self) -> &[FilePlan] {
        &self.input_files
    }

    /// Processes every file in order, reporting progress on stdout.
    ///
    /// Nothing stops the batch: per-file failures are reported and skipped,
    /// and status lines that cannot be written are only logged.
    pub fn execute(&self) {
        crate::init::init();
        // acquire a buffered writer to which we can make lots of small writes cheaply
        let mut stdout = std::io::stdout().lock();
        self.execute_with(&mut stdout)
    }

    pub fn execute_with(&self, out: &mut impl Write) {
        for file_plan in &self.input_files {
            match self.process_file(file_plan, out) {
                FileOutcome::Failed(error) => {
                    warn!(input = %file_plan.input, %error, "conversion failed");
                }
                outcome => debug!(input = %file_plan.input, ?outcome, "finished file"),
            }
        }
    }

    fn process_file(&self, file_plan: &FilePlan, out: &mut impl Write) -> FileOutcome {
        if !Path::new(&file_plan.input).exists() {
            report(out, format_args!("❌ File not found: {}", file_plan.input));
            return FileOutcome::NotFound;
        }

        report(
            out,
            format_args!("🔄 Converting: {} -> {}", file_plan.input, file_plan.output),
        );

        match self.convert(file_plan) {
            Ok(()) => {
                report(out, format_args!("✅ Saved to: {}", file_plan.output));
                FileOutcome::Converted
            }
            Err(error) => {
                report(
                    out,
                    format_args!("⚠️ Failed to process {}: {}", file_plan.input, error),
                );
                FileOutcome::Failed(error)
            }
        }
    }

    fn convert(&self, file_plan: &FilePlan) -> Result<(), FitError> {
        let mut image = decode(Path::new(&file_plan.input))?;

        for operation in &self.ops {
            operation.execute(&mut image)?;
        }

        encode::encode(
            &image,
            Path::new(&file_plan.output),
            self.modifiers.quality,
        )
    }
}

/// Writes one status line and flushes it, so that progress shows up before a slow decode.
///
/// A closed or broken stdout must not cost us the remaining conversions, so failures are only logged.
fn report(out: &mut impl Write, line: std::fmt::Arguments<'_>) {
    if let Err(error) = writeln!(out, "{}", line).and_then(|()| out.flush()) {
        warn!(%error, status = %line, "unable to write status line");
    }
}
