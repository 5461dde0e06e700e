use std::fmt::{Debug, Display};

/// Which step of the run failed. Every kind is fatal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::IntoStaticStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    /// Input missing, unreadable or not a recognized image
    Decode,
    /// The resampler rejected the buffer or the target dimensions
    Resize,
    /// Output not writable, or the pixels can't be stored in the target format
    Encode,
    /// Bad command-line arguments
    Usage,
}

pub struct ResizeError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ResizeError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind: &'static str = self.kind.into();
        write!(f, "{kind} error: {}", self.message)
    }
}

impl Debug for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for ResizeError {}

#[macro_export]
macro_rules! rz_err {
    ($kind:expr, $($fmt:tt)+) => {
        $crate::error::ResizeError::new(
            $kind,
            format!(
                "{} @ {}:{}:{}",
                format_args!($($fmt)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! rz_try {
    ($kind:expr, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::rz_err!($kind, "{}", err));
            }
        }
    };
}
