#![allow(clippy::uninlined_format_args)]

//! Error related data structures to be shared and used.
//!
//! This module contains the [`Error`] enum, which is used to represent
//! errors that can occur within Boytacean domain.

use std::fmt::{self, Display, Formatter};
use std::io;

/// Top level enum for error handling within Boytacean.
///
/// Covers both the low-level failures raised while parsing data and the
/// host-facing taxonomy returned by cartridge loading and save-state
/// operations.
///
/// Most of the time, you will want to use the `CustomError` variant
/// to provide a more detailed error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidData,
    RomSize,
    IncompatibleBootRom,
    InvalidParameter(String),
    CustomError(String),

    /// ROM image is smaller than the minimum size implied by its own header.
    CartridgeTooSmall,
    /// The header checksum at 0x14D does not match the computed value.
    BadHeaderChecksum,
    /// The cartridge type byte at 0x147 names an MBC this core does not implement.
    UnsupportedCartridgeType,
    /// A host file could not be opened or read.
    OpenFileError,
    /// A save-state's cartridge header does not match the loaded cartridge.
    CartridgeMismatch,
    /// A save-state section failed to deserialize; prior state is preserved.
    LoadingError,
    /// A save-state could not be serialized or written out.
    SavingError,
    /// The CPU fetched an opcode with no defined behavior and halted.
    IllegalOpcodeTrap,
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::InvalidData => String::from("Invalid data format"),
            Error::RomSize => String::from("Invalid ROM size"),
            Error::IncompatibleBootRom => String::from("Incompatible Boot ROM"),
            Error::InvalidParameter(message) => format!("Invalid parameter: {}", message),
            Error::CustomError(message) => String::from(message),
            Error::CartridgeTooSmall => String::from("Cartridge ROM is too small"),
            Error::BadHeaderChecksum => String::from("Cartridge header checksum mismatch"),
            Error::UnsupportedCartridgeType => String::from("Unsupported cartridge type"),
            Error::OpenFileError => String::from("Failed to open file"),
            Error::CartridgeMismatch => {
                String::from("Save state does not match the loaded cartridge")
            }
            Error::LoadingError => String::from("Failed to load state"),
            Error::SavingError => String::from("Failed to save state"),
            Error::IllegalOpcodeTrap => String::from("CPU halted on illegal opcode"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl From<io::Error> for Error {
    fn from(_value: io::Error) -> Self {
        Error::LoadingError
    }
}
