use std::path::Path;
use std::process::{Command, Output, Stdio};

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    let binary = env!("CARGO_BIN_EXE_fitjpeg");
    Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("fitjpeg could not be started")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn assert_640x400_rgb(path: &Path) {
    let converted = image::open(path).unwrap();
    assert_eq!(converted.dimensions(), (640, 400));
    assert_eq!(converted.color(), image::ColorType::Rgb8);
}

#[test]
fn test_default_list_converts_present_and_skips_missing() {
    let dir = tempfile::tempdir().unwrap();
    DynamicImage::new_rgb8(300, 200)
        .save(dir.path().join("g1.jpeg"))
        .unwrap();

    let result = run_in(dir.path(), &[]);

    assert!(result.status.success());
    let printed = stdout(&result);
    assert!(
        printed.contains("🔄 Converting: g1.jpeg -> g1_640x400.jpeg"),
        "{}",
        printed
    );
    assert!(printed.contains("✅ Saved to: g1_640x400.jpeg"), "{}", printed);
    assert!(printed.contains("❌ File not found: g2.jpeg"), "{}", printed);
    assert_640x400_rgb(&dir.path().join("g1_640x400.jpeg"));
    assert!(!dir.path().join("g2_640x400.jpeg").exists());
}

#[test]
fn test_missing_files_only_print_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let result = run_in(dir.path(), &[]);

    assert!(result.status.success());
    assert_eq!(
        stdout(&result),
        "❌ File not found: g1.jpeg\n❌ File not found: g2.jpeg\n"
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_failures_keep_exit_status_zero() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("g1.jpeg"), b"not an image").unwrap();
    std::fs::write(dir.path().join("g2.jpeg"), b"").unwrap();

    let result = run_in(dir.path(), &[]);

    assert!(result.status.success());
    let printed = stdout(&result);
    assert!(printed.contains("⚠️ Failed to process g1.jpeg: "), "{}", printed);
    assert!(printed.contains("⚠️ Failed to process g2.jpeg: "), "{}", printed);
    assert!(!dir.path().join("g1_640x400.jpeg").exists());
    assert!(!dir.path().join("g2_640x400.jpeg").exists());
}

#[test]
fn test_closed_stdout_still_converts_everything() {
    let dir = tempfile::tempdir().unwrap();
    DynamicImage::new_rgb8(30, 20)
        .save(dir.path().join("g1.jpeg"))
        .unwrap();
    DynamicImage::new_rgb8(20, 30)
        .save(dir.path().join("g2.jpeg"))
        .unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_fitjpeg"))
        .current_dir(dir.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("fitjpeg could not be started");
    // nobody is listening for status lines anymore
    drop(child.stdout.take());
    let status = child.wait().unwrap();

    assert!(status.success());
    assert_640x400_rgb(&dir.path().join("g1_640x400.jpeg"));
    assert_640x400_rgb(&dir.path().join("g2_640x400.jpeg"));
}

#[test]
fn test_explicit_files_replace_default_list() {
    let dir = tempfile::tempdir().unwrap();
    DynamicImage::new_luma8(50, 50)
        .save(dir.path().join("photo.jpg"))
        .unwrap();

    let result = run_in(dir.path(), &["photo.jpg"]);

    assert!(result.status.success());
    assert!(!stdout(&result).contains("g1.jpeg"));
    assert_640x400_rgb(&dir.path().join("photo_640x400.jpeg"));
}

#[cfg(feature = "gif")]
#[test]
fn test_palette_transparency_becomes_white() {
    let dir = tempfile::tempdir().unwrap();
    let mut rgba = RgbaImage::from_pixel(40, 25, Rgba([0, 0, 0, 0]));
    for x in 20..40 {
        for y in 0..25 {
            rgba.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        }
    }
    rgba.save(dir.path().join("sticker.gif")).unwrap();

    let result = run_in(dir.path(), &["sticker.gif"]);

    assert!(result.status.success());
    let output = dir.path().join("sticker.gif_640x400.jpeg");
    assert_640x400_rgb(&output);
    let converted = image::open(&output).unwrap().into_rgb8();
    let transparent_side = converted.get_pixel(20, 200);
    assert!(
        transparent_side.0.iter().all(|c| *c > 240),
        "{:?}",
        transparent_side
    );
    let red_side = converted.get_pixel(620, 200);
    assert!(red_side.0[0] > 220 && red_side.0[1] < 40, "{:?}", red_side);
}

#[test]
fn test_running_twice_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    DynamicImage::new_rgb8(1920, 1080)
        .save(dir.path().join("g2.jpeg"))
        .unwrap();

    for _ in 0..2 {
        let result = run_in(dir.path(), &[]);
        assert!(result.status.success());
        assert_640x400_rgb(&dir.path().join("g2_640x400.jpeg"));
    }
}

#[test]
fn test_help_exits_successfully() {
    let dir = tempfile::tempdir().unwrap();

    let result = run_in(dir.path(), &["--help"]);

    assert!(result.status.success());
    assert!(stdout(&result).contains("Usage: fitjpeg"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unknown_option_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let result = run_in(dir.path(), &["-resize", "10x10"]);

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("unrecognized option"));
}
