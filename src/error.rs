use std::fmt::{Debug, Display};

/// The one error type of the conversion pipeline.
///
/// Every failure while opening, decoding, converting, resizing or saving an image
/// ends up here as a human-readable message. Callers are not expected to tell failure kinds apart.
pub struct FitError(pub String);

impl Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FitError").field(&self.0).finish()
    }
}

impl std::error::Error for FitError {}

#[macro_export]
macro_rules! fj_err {
    ($msg:expr) => {
        $crate::error::FitError(format!(
            "fitjpeg: {} @ {}:{}:{}",
            $msg,
            file!(),
            line!(),
            column!()
        ))
    };
    ($fmt:literal, $($arg:tt)+) => {
        $crate::fj_err!(format!($fmt, $($arg)+))
    };
}

#[macro_export]
macro_rules! fj_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::fj_err!(err));
            }
        }
    };
}
