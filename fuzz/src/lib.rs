use std::path::{Path, PathBuf};

use image::GenericImageView as _;
use tempfile::TempDir;

/// Runs the batch over a single input file inside `directory`.
///
/// Returns the output path if one was produced, after checking that it is a 640x400 RGB image.
pub fn convert_and_check(directory: &TempDir, input: &Path) -> Option<PathBuf> {
    let input = input.to_str().expect("temporary paths are UTF-8").to_owned();
    let plan = fitjpeg::plan::ExecutionPlan::new([input]);
    let output = PathBuf::from(&plan.input_files()[0].output);

    let mut sink = Vec::new();
    plan.execute_with(&mut sink);

    if !output.exists() {
        return None;
    }
    assert!(output.starts_with(directory.path()));

    let converted = image::open(&output).expect("could not open the fitjpeg output file");
    assert_eq!(converted.dimensions(), (640, 400));
    assert_eq!(converted.color(), image::ColorType::Rgb8);
    Some(output)
}
