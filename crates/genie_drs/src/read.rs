//! Types for reading DRS resource set archives
//!

use binrw::BinRead;
use std::io::{Read, Seek, SeekFrom};
use tracing::debug;

use crate::{
    error::{Error, Result},
    types::{DrsEntry, DrsHeader, DrsTableInfo, DRS_VERSION},
};

/// Upper bound on the number of resource tables a header may declare.
///
/// Real resource sets hold a handful of tables; the counts are read from
/// untrusted input, so allocations keyed off them are capped.
pub const MAX_TABLE_COUNT: u32 = 1024;

/// Upper bound on the number of entries a single table may declare.
pub const MAX_TABLE_ENTRIES: u32 = 1 << 20;

/// Upper bound on the payload size a single entry may declare, in bytes.
pub const MAX_ENTRY_SIZE: u32 = 1 << 28;

/// DRS archive reader
///
/// Reads the header and the resource table descriptors up front; entry
/// tables and payloads are read on demand so peak memory stays bounded by
/// one table's worth of entries plus one payload.
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn list_drs_contents(reader: impl Read + Seek) -> genie_drs::error::Result<()> {
///     let mut drs = genie_drs::DrsArchive::new(reader)?;
///
///     let mut entries = drs.entry_buffer();
///     for i in 0..drs.table_count() {
///         let table = drs.tables()[i];
///         drs.read_entries(i, &mut entries)?;
///         for entry in &entries {
///             println!("{}", table.file_name(entry.id));
///         }
///     }
///
///     Ok(())
/// }
/// ```
pub struct DrsArchive<R> {
    reader: R,
    header: DrsHeader,
    tables: Vec<DrsTableInfo>,
}

impl<R> DrsArchive<R> {
    /// The archive header.
    pub fn header(&self) -> &DrsHeader {
        &self.header
    }

    /// The resource table descriptors, in on-disk order.
    pub fn tables(&self) -> &[DrsTableInfo] {
        &self.tables
    }

    /// Number of resource tables in this archive.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Total number of entries across all tables.
    pub fn len(&self) -> usize {
        self.tables.iter().map(|t| t.file_count as usize).sum()
    }

    /// Whether this archive contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The largest entry count declared by any table, including zero-entry
    /// tables.
    pub fn max_file_count(&self) -> usize {
        self.tables
            .iter()
            .map(|t| t.file_count as usize)
            .max()
            .unwrap_or(0)
    }

    /// An entry buffer sized for the largest table, suitable for reuse
    /// across every [`DrsArchive::read_entries`] call on this archive.
    pub fn entry_buffer(&self) -> Vec<DrsEntry> {
        Vec::with_capacity(self.max_file_count())
    }

    /// Unwrap and return the inner reader object
    ///
    /// The position of the reader is undefined.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + Seek> DrsArchive<R> {
    /// Read a DRS archive, collecting its header and table descriptors.
    ///
    /// The reader must be positioned at the start of the archive. Fails with
    /// [`Error::UnsupportedVersion`] when the header's version field is not
    /// [`DRS_VERSION`], and with [`Error::TooManyTables`] or
    /// [`Error::TooManyEntries`] when a count field is implausibly large.
    pub fn new(mut reader: R) -> Result<DrsArchive<R>> {
        let header = DrsHeader::read(&mut reader)?;
        if header.version != DRS_VERSION {
            return Err(Error::UnsupportedVersion(header.version));
        }
        if header.table_count > MAX_TABLE_COUNT {
            return Err(Error::TooManyTables(header.table_count));
        }

        let mut tables = Vec::with_capacity(header.table_count as usize);
        for index in 0..header.table_count as usize {
            let table = DrsTableInfo::read(&mut reader)?;
            if table.file_count > MAX_TABLE_ENTRIES {
                return Err(Error::TooManyEntries {
                    index,
                    file_count: table.file_count,
                });
            }
            tables.push(table);
        }

        debug!(
            tables = tables.len(),
            tribe = %header.tribe(),
            "read resource set metadata"
        );

        Ok(DrsArchive {
            reader,
            header,
            tables,
        })
    }

    /// Read the entry table for the table descriptor at `index` into
    /// `entries`, replacing its previous contents.
    ///
    /// Seeks to the table's absolute offset and reads exactly `file_count`
    /// records. A table with zero entries is valid and leaves `entries`
    /// empty.
    pub fn read_entries(&mut self, index: usize, entries: &mut Vec<DrsEntry>) -> Result<()> {
        let table = *self.tables.get(index).ok_or(Error::TableNotFound(index))?;

        entries.clear();
        self.reader.seek(SeekFrom::Start(table.offset as u64))?;
        for _ in 0..table.file_count {
            entries.push(DrsEntry::read(&mut self.reader)?);
        }

        Ok(())
    }

    /// Read the payload of `entry` into `buf`, replacing its previous
    /// contents.
    ///
    /// Seeks to the entry's absolute offset and reads exactly `size` bytes;
    /// a truncated archive surfaces as [`Error::IOError`]. The bytes are
    /// copied verbatim, never interpreted.
    pub fn read_entry_data(&mut self, entry: &DrsEntry, buf: &mut Vec<u8>) -> Result<()> {
        if entry.size > MAX_ENTRY_SIZE {
            return Err(Error::EntryTooLarge {
                id: entry.id,
                size: entry.size,
            });
        }

        buf.clear();
        buf.resize(entry.size as usize, 0);
        self.reader.seek(SeekFrom::Start(entry.offset as u64))?;
        self.reader.read_exact(buf)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use crate::error::Error;
    use crate::read::DrsArchive;

    const HEADER_SIZE: usize = 64;
    const TABLE_INFO_SIZE: usize = 12;

    fn header(version: u32, table_count: u32, data_offset: u32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE);
        let mut copyright = [0u8; 36];
        copyright[..36].copy_from_slice(b"Copyright (c) 1997 Ensemble Studios.");
        bytes.extend_from_slice(&copyright);
        bytes.extend_from_slice(&version.to_le_bytes());
        let mut tribe = [0u8; 16];
        tribe[..9].copy_from_slice(b"1.00tribe");
        bytes.extend_from_slice(&tribe);
        bytes.extend_from_slice(&table_count.to_le_bytes());
        bytes.extend_from_slice(&data_offset.to_le_bytes());
        bytes
    }

    fn table_info(flag: u8, ext: &[u8; 3], offset: u32, file_count: u32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(TABLE_INFO_SIZE);
        bytes.push(flag);
        bytes.extend_from_slice(ext);
        bytes.extend_from_slice(&offset.to_le_bytes());
        bytes.extend_from_slice(&file_count.to_le_bytes());
        bytes
    }

    fn entry(id: u32, offset: u32, size: u32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(12);
        bytes.extend_from_slice(&id.to_le_bytes());
        bytes.extend_from_slice(&offset.to_le_bytes());
        bytes.extend_from_slice(&size.to_le_bytes());
        bytes
    }

    #[test]
    fn read_rejects_wrong_version() {
        let input = header(27, 0, HEADER_SIZE as u32);

        let archive = DrsArchive::new(Cursor::new(input));
        assert!(matches!(archive, Err(Error::UnsupportedVersion(27))));
    }

    #[test]
    fn read_rejects_implausible_table_count() {
        let input = header(26, u32::MAX, HEADER_SIZE as u32);

        let archive = DrsArchive::new(Cursor::new(input));
        assert!(matches!(archive, Err(Error::TooManyTables(u32::MAX))));
    }

    #[test]
    fn read_rejects_implausible_entry_count() {
        let mut input = header(26, 1, (HEADER_SIZE + TABLE_INFO_SIZE) as u32);
        input.extend(table_info(0, b"pls", (HEADER_SIZE + TABLE_INFO_SIZE) as u32, u32::MAX));

        let archive = DrsArchive::new(Cursor::new(input));
        assert!(matches!(
            archive,
            Err(Error::TooManyEntries {
                index: 0,
                file_count: u32::MAX
            })
        ));
    }

    #[test]
    fn read_truncated_header() {
        let input = header(26, 0, HEADER_SIZE as u32);

        let archive = DrsArchive::new(Cursor::new(&input[..20]));
        assert!(archive.is_err());
    }

    #[test]
    fn read_empty_archive() {
        let input = header(26, 0, HEADER_SIZE as u32);

        let archive = DrsArchive::new(Cursor::new(input)).unwrap();
        assert_eq!(archive.table_count(), 0);
        assert!(archive.is_empty());
        assert_eq!(archive.max_file_count(), 0);
    }

    #[test]
    fn read_truncated_table_descriptors() {
        let mut input = header(26, 2, (HEADER_SIZE + 2 * TABLE_INFO_SIZE) as u32);
        input.extend(table_info(0, b"pls", 0, 0));
        // second descriptor cut off mid-record
        input.extend_from_slice(&[0x00, 0x76, 0x61]);

        let archive = DrsArchive::new(Cursor::new(input));
        assert!(archive.is_err());
    }

    #[test]
    fn read_zero_entry_table() {
        let table_offset = (HEADER_SIZE + TABLE_INFO_SIZE) as u32;
        let mut input = header(26, 1, table_offset);
        input.extend(table_info(0, b"pls", table_offset, 0));

        let mut archive = DrsArchive::new(Cursor::new(input)).unwrap();
        assert!(archive.is_empty());

        let mut entries = archive.entry_buffer();
        archive.read_entries(0, &mut entries).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn buffer_sized_from_largest_table() {
        let tables_end = (HEADER_SIZE + 3 * TABLE_INFO_SIZE) as u32;
        let mut input = header(26, 3, tables_end);
        input.extend(table_info(0, b"pls", tables_end, 2));
        input.extend(table_info(0, b"vaw", tables_end, 0));
        input.extend(table_info(0, b"nib", tables_end, 5));

        let archive = DrsArchive::new(Cursor::new(input)).unwrap();
        assert_eq!(archive.max_file_count(), 5);
        assert_eq!(archive.entry_buffer().capacity(), 5);
        assert_eq!(archive.len(), 7);
    }

    #[test]
    fn read_entries_and_data() {
        let table_offset = (HEADER_SIZE + TABLE_INFO_SIZE) as u32;
        let data_offset = table_offset + 12;
        let payload = b"Hello World";

        let mut input = header(26, 1, data_offset);
        input.extend(table_info(0x61, b"pls", table_offset, 1));
        input.extend(entry(700, data_offset, payload.len() as u32));
        input.extend_from_slice(payload);

        let mut archive = DrsArchive::new(Cursor::new(input)).unwrap();
        let mut entries = archive.entry_buffer();
        archive.read_entries(0, &mut entries).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 700);

        let mut data = Vec::new();
        archive.read_entry_data(&entries[0], &mut data).unwrap();
        assert_eq!(data, payload);
    }

    #[test]
    fn read_entry_data_truncated_payload() {
        let table_offset = (HEADER_SIZE + TABLE_INFO_SIZE) as u32;
        let data_offset = table_offset + 12;

        let mut input = header(26, 1, data_offset);
        input.extend(table_info(0, b"pls", table_offset, 1));
        // declared size reaches past the end of the file
        input.extend(entry(700, data_offset, 1024));
        input.extend_from_slice(b"short");

        let mut archive = DrsArchive::new(Cursor::new(input)).unwrap();
        let mut entries = archive.entry_buffer();
        archive.read_entries(0, &mut entries).unwrap();

        let mut data = Vec::new();
        let result = archive.read_entry_data(&entries[0], &mut data);
        assert!(matches!(result, Err(Error::IOError(_))));
    }

    #[test]
    fn read_entries_out_of_range_table() {
        let input = header(26, 0, HEADER_SIZE as u32);

        let mut archive = DrsArchive::new(Cursor::new(input)).unwrap();
        let mut entries = Vec::new();
        assert!(matches!(
            archive.read_entries(3, &mut entries),
            Err(Error::TableNotFound(3))
        ));
    }
}
