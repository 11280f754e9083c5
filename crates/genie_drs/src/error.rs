//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

use crate::read::{MAX_ENTRY_SIZE, MAX_TABLE_COUNT, MAX_TABLE_ENTRIES};
use crate::types::DRS_VERSION;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// the header declares a version this library does not support
    #[error("unsupported resource set version {0}, expected {expected}", expected = DRS_VERSION)]
    UnsupportedVersion(u32),

    /// the header declares an implausible number of resource tables
    #[error("table count {0} exceeds the supported maximum of {max}", max = MAX_TABLE_COUNT)]
    TooManyTables(u32),

    /// a table descriptor declares an implausible number of entries
    #[error(
        "table {index} declares {file_count} entries, more than the supported maximum of {max}",
        max = MAX_TABLE_ENTRIES
    )]
    TooManyEntries {
        /// position of the offending table in the descriptor table
        index: usize,
        /// the declared entry count
        file_count: u32,
    },

    /// an entry declares an implausible payload size
    #[error(
        "entry {id} declares a size of {size} bytes, more than the supported maximum of {max}",
        max = MAX_ENTRY_SIZE
    )]
    EntryTooLarge {
        /// the entry's resource identifier
        id: u32,
        /// the declared payload size in bytes
        size: u32,
    },

    /// no resource table exists at the requested index
    #[error("no resource table at index {0}")]
    TableNotFound(usize),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
