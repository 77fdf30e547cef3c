//! `fitjpeg` converts a list of images to 640x400 JPEG files.
//!
//! Each input is decoded, flattened onto white if it has transparency, stretched to 640x400
//! with a Lanczos filter and written as a quality 95 JPEG next to the input.
//! Per-file failures are reported and never stop the batch.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
mod init;
pub mod operations;
pub mod plan;
mod utils;
