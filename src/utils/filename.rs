use crate::operations::TargetSize;

/// Derives the output file name for an input, e.g. `g1.jpeg` -> `g1_640x400.jpeg`.
///
/// Every occurrence of `.jpeg` and then of `.jpg` is removed, wherever it appears in the name,
/// before the `_<width>x<height>.jpeg` suffix is appended. Directory components are kept,
/// so the output lands next to its input.
pub fn output_name(input: &str, target: TargetSize) -> String {
    let stem = input.replace(".jpeg", "").replace(".jpg", "");
    format!("{}_{}x{}.jpeg", stem, target.width, target.height)
}
