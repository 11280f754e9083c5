//! Base types for the structure of a DRS resource set file.

use binrw::BinRead;

/// The only resource set version this library accepts.
pub const DRS_VERSION: u32 = 26;

/// DRS file header
///
/// Fixed 64-byte record at the start of every resource set. All integers are
/// stored in little endian format.
#[derive(BinRead, Debug, Copy, Clone, PartialEq)]
#[br(little)]
pub struct DrsHeader {
    /// Copyright notice, NUL padded ("Copyright (c) 1997 Ensemble Studios.")
    pub copyright: [u8; 36],

    /// Format version, always [`DRS_VERSION`] for the supported layout
    pub version: u32,

    /// Tribe/format tag, NUL padded ("1.00tribe")
    pub tribe: [u8; 16],

    /// The number of resource tables that follow the header
    pub table_count: u32,

    /// The offset from the beginning of the file where resource data starts
    pub data_offset: u32,
}

impl DrsHeader {
    /// The copyright notice with trailing NUL padding removed.
    pub fn copyright(&self) -> String {
        string_from_padded(&self.copyright)
    }

    /// The tribe/format tag with trailing NUL padding removed.
    pub fn tribe(&self) -> String {
        string_from_padded(&self.tribe)
    }
}

/// DRS resource table descriptor
///
/// One per resource category, stored contiguously right after the header.
/// Describes where that category's entry table lives and how many entries
/// it holds.
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq)]
#[br(little)]
pub struct DrsTableInfo {
    /// Flag byte with no documented meaning, carried through opaquely
    pub flag: u8,

    /// Three-character type tag, stored back to front ("pls" for `.slp`)
    pub extension_raw: [u8; 3],

    /// Absolute offset of this table's entry records within the file
    pub offset: u32,

    /// The number of entry records in this table
    pub file_count: u32,
}

impl DrsTableInfo {
    /// The type tag in conventional reading order.
    ///
    /// The on-disk tag is byte-reversed relative to the file extension it
    /// represents, so `['a', 'b', 'c']` reads back as `"cba"`.
    pub fn extension(&self) -> String {
        self.extension_raw.iter().rev().map(|&b| b as char).collect()
    }

    /// The output filename for a resource identifier under this table,
    /// `<id>.<extension>`.
    pub fn file_name(&self, id: u32) -> String {
        format!("{}.{}", id, self.extension())
    }
}

/// DRS resource entry
///
/// Locates one extractable payload within the file. The payload bytes are
/// opaque to this library.
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq)]
#[br(little)]
pub struct DrsEntry {
    /// Numeric resource identifier, unique within its table
    pub id: u32,

    /// Absolute offset of the payload within the file
    pub offset: u32,

    /// Payload size in bytes
    pub size: u32,
}

fn string_from_padded(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}
