use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;

use crate::plan::{DEFAULT_INPUT_FILES, JPEG_QUALITY, TARGET_SIZE};

/// Prints help and exits if the first argument asks for it.
///
/// Running without arguments is a normal run over the built-in file list, not a request for help.
pub fn maybe_print_help_and_exit(bin_name: &str) {
    if let Some(arg) = std::env::args_os().nth(1) {
        if is_help_flag(&arg) {
            print_help_and_exit(bin_name)
        }
    }
}

fn is_help_flag(arg: &OsStr) -> bool {
    arg == OsStr::new("--help") || arg == OsStr::new("-help") || arg == OsStr::new("-h")
}

fn print_help_and_exit(bin_name: &str) -> ! {
    print_help(bin_name);
    std::process::exit(0);
}

fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} [file ...]");
    println!();
    println!(
        "Converts each file to a {}x{} JPEG (quality {}) named <name>_{}x{}.jpeg,",
        TARGET_SIZE.width, TARGET_SIZE.height, JPEG_QUALITY, TARGET_SIZE.width, TARGET_SIZE.height
    );
    println!("flattening any transparency onto a white background.");
    println!("Without arguments converts: {}", DEFAULT_INPUT_FILES.join(" "));
    println!("Set RUST_LOG=debug for diagnostics on stderr.");
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    let repo = env!("CARGO_PKG_REPOSITORY");

    format!("fitjpeg {version} {cpu} {repo}")
}
