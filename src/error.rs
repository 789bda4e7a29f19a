use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// A message must contain at least one symbol.
    #[display("A Morse message needs at least one symbol")]
    InvalidMessage,

    /// A pattern contained something other than `.` or `-`.
    #[display("Invalid Morse symbol {_0:?}; expected '.' or '-'")]
    InvalidSymbol(#[error(not(source))] char),

    /// A pattern did not fit in [`crate::MAX_SYMBOLS`] symbols.
    #[display("Morse pattern is longer than the symbol buffer")]
    MessageTooLong,

    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    /// An Embassy task could not be spawned.
    #[cfg(any(feature = "pico1", feature = "pico2"))]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}

/// Rust's `!` is unstable.  This empty enum is a locally-defined equivalent which is stable.
///
/// Firmware entry points return `Result<Never>`: they only ever come back with an error.
#[derive(Debug)]
pub enum Never {}
