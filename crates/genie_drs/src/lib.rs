//! This library handles reading and extracting **DRS** resource set files used by *Genie engine* games.
//!
//! # DRS Resource Set Format Documentation
//!
//! This crate provides utilities to read and extract data from the **DRS** archive format used by
//! 1990s-era Genie engine strategy games such as *Age of Empires*. A DRS file ("resource set")
//! stores many independent game resources within a single file, grouped into per-type tables.
//! DRS files are typically identified with the `.drs` extension.
//!
//! ## File Structure
//!
//! A DRS file consists of a fixed header, followed by a contiguous array of resource table
//! descriptors, each table's entry records, and the resource data itself.
//!
//! | Offset (bytes) | Field            | Description                                          |
//! |----------------|------------------|------------------------------------------------------|
//! | 0x0000         | Copyright notice | 36 bytes: NUL-padded copyright string                |
//! | 0x0024         | Version          | 4 bytes: fixed value `26`                            |
//! | 0x0028         | Tribe tag        | 16 bytes: NUL-padded format tag ("1.00tribe")        |
//! | 0x0038         | Table count      | 4 bytes: number of resource tables                   |
//! | 0x003C         | Data offset      | 4 bytes: offset of the resource data section         |
//!
//! ### Header
//!
//! - **Copyright notice**: A 36-byte NUL-padded string, "Copyright (c) 1997 Ensemble Studios."
//!   in retail archives.
//! - **Version**: A 4-byte unsigned integer giving the format version. Only the value `26` is
//!   accepted; any other value is rejected before anything else is read.
//! - **Tribe tag**: A 16-byte NUL-padded string identifying the format flavour, "1.00tribe" in
//!   retail archives.
//! - **Table count**: A 4-byte unsigned integer giving the number of resource table descriptors
//!   that immediately follow the header.
//! - **Data offset**: A 4-byte unsigned integer giving the offset where the resource data
//!   section begins.
//!
//! ### Resource Table Descriptors
//!
//! Immediately after the header, one 12-byte descriptor per resource category:
//!
//! | Offset (bytes) | Field      | Description                                                |
//! |----------------|------------|------------------------------------------------------------|
//! | 0x0000         | Flag       | 1 byte: undocumented, carried through opaquely             |
//! | 0x0001         | Type tag   | 3 bytes: file extension stored in reverse byte order       |
//! | 0x0004         | Offset     | 4 bytes: absolute offset of this table's entry records     |
//! | 0x0008         | Count      | 4 bytes: number of entry records in this table             |
//!
//! The type tag is stored back to front: a table of `.slp` graphics carries the bytes
//! `['p', 'l', 's']` on disk. A table may declare zero entries.
//!
//! ### Entry Records
//!
//! At each table's offset, one 12-byte record per resource:
//!
//! | Offset (bytes) | Field      | Description                                         |
//! |----------------|------------|-----------------------------------------------------|
//! | 0x0000         | Identifier | 4 bytes: numeric resource identifier                |
//! | 0x0004         | Offset     | 4 bytes: absolute offset of the resource payload    |
//! | 0x0008         | Size       | 4 bytes: payload size in bytes                      |
//!
//! Payload bytes are opaque: this library never interprets, validates, or transforms them.
//! An extracted resource is conventionally named `<identifier>.<tag>` with the tag read in
//! conventional (un-reversed) order.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.drs`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Packing**: No padding between fields within a record
//!

pub mod error;
pub mod read;
pub mod types;

pub use read::DrsArchive;
pub use types::{DrsEntry, DrsHeader, DrsTableInfo, DRS_VERSION};
