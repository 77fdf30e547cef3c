#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary file contents must either convert cleanly or be reported as a failure, never panic.
fuzz_target!(|data: &[u8]| {
    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input.jpeg");
    std::fs::write(&input_path, data).expect("failed to write input file");

    fitjpeg_fuzz::convert_and_check(&temp_directory, &input_path);
});
