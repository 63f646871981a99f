use thiserror::Error;

// exit codes from sysexits.h
pub const EX_USAGE: i32 = 64;
pub const EX_OSERR: i32 = 71;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not macOS (kernel: {kernel:?})")]
    UnsupportedPlatform { kernel: String },

    #[error("unknown operation {0:?}, expected one of: show, hide, toggle")]
    UnknownOperation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnsupportedPlatform { .. } => EX_OSERR,
            Error::UnknownOperation(_) => EX_USAGE,
            Error::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
