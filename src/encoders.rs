//! Format-specific encoders

pub mod jpeg;
