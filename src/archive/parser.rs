//! Low-level InstallShield archive parser.
//!
//! This module handles the binary parsing of the archive header and the
//! directory and file tables, reading from any source that implements
//! the [`ReadAt`] trait.
//!
//! ## Parsing Strategy
//!
//! Every part file starts with the same layout:
//! 1. The magic and header size byte, then the fixed header
//! 2. The header points at the directory table and the file table
//! 3. Each table is read in a single request and walked entry by entry
//!
//! Entry sizes are cross-checked against the fixed record size plus the
//! name length, and the sum of entry sizes against the size declared in
//! the header, so a misaligned table is reported rather than misread.

use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::Encoding;
use std::io::{Cursor, Read};
use std::sync::Arc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::ReadAt;

use super::structures::*;

const DIRECTORY_TABLE: &str = "directory";
const FILE_TABLE: &str = "file";

/// Low-level parser for one part file.
///
/// Typically used through [`ArchiveContainer`](super::ArchiveContainer)
/// rather than directly.
pub struct ArchiveParser<R: ReadAt> {
    /// The underlying data source
    reader: Arc<R>,
    /// Encoding of directory and file names
    encoding: &'static Encoding,
}

impl<R: ReadAt> ArchiveParser<R> {
    pub fn new(reader: Arc<R>, encoding: &'static Encoding) -> Self {
        Self { reader, encoding }
    }

    /// Check the magic and header size, then parse the fixed header.
    pub async fn read_header(&self) -> Result<ArchiveHeader> {
        let mut prefix = [0u8; ArchiveHeader::OFFSET as usize];
        self.reader
            .read_exact_at(0, &mut prefix, "archive signature")
            .await?;

        let magic = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]);
        if magic != ArchiveHeader::MAGIC {
            return Err(Error::InvalidMagic(magic));
        }
        if prefix[4] != ArchiveHeader::SIZE {
            return Err(Error::InvalidHeaderSize(prefix[4]));
        }

        let mut buf = vec![0u8; ArchiveHeader::SIZE as usize];
        self.reader
            .read_exact_at(ArchiveHeader::OFFSET, &mut buf, "archive header")
            .await?;
        let header = ArchiveHeader::from_bytes(&buf)?;

        debug!(
            part = header.part_id,
            parts = header.total_parts,
            flags = header.flags,
            files = header.num_files,
            dirs = header.num_dirs,
            "parsed archive header"
        );
        Ok(header)
    }

    /// Read the directory table described by `header`.
    pub async fn read_directories(&self, header: &ArchiveHeader) -> Result<Vec<DirEntry>> {
        let data = self
            .read_table(
                header.dirs_list_offset,
                header.dirs_list_size,
                "directory table",
            )
            .await?;
        let mut cursor = Cursor::new(data.as_slice());

        let mut dirs = Vec::with_capacity(header.num_dirs as usize);
        let mut consumed = 0u64;
        for index in 0..header.num_dirs as usize {
            let dir = self
                .parse_dir_entry(&mut cursor, index)
                .map_err(|e| truncated(e, DIRECTORY_TABLE, index))?;
            consumed += dir.entry_size as u64;
            dirs.push(dir);
        }

        check_table_size(DIRECTORY_TABLE, consumed, header.dirs_list_size)?;
        Ok(dirs)
    }

    /// Read the file table described by `header`, resolving each entry's
    /// directory against `dirs`.
    pub async fn read_files(
        &self,
        header: &ArchiveHeader,
        dirs: &[DirEntry],
    ) -> Result<Vec<FileEntry>> {
        let data = self
            .read_table(header.files_list_offset, header.files_list_size, "file table")
            .await?;
        let mut cursor = Cursor::new(data.as_slice());

        let mut files = Vec::with_capacity(header.num_files as usize);
        let mut consumed = 0u64;
        for index in 0..header.num_files as usize {
            let file = self
                .parse_file_entry(&mut cursor, index)
                .map_err(|e| truncated(e, FILE_TABLE, index))?;
            if file.dir_id as usize >= dirs.len() {
                return Err(Error::DirectoryOutOfRange {
                    index,
                    dir_id: file.dir_id,
                    count: dirs.len(),
                });
            }
            consumed += file.entry_size as u64;
            files.push(file);
        }

        check_table_size(FILE_TABLE, consumed, header.files_list_size)?;
        Ok(files)
    }

    async fn read_table(&self, offset: u32, size: u32, what: &'static str) -> Result<Vec<u8>> {
        let available = self.reader.size();
        if offset as u64 + size as u64 > available {
            return Err(Error::ShortRead {
                what,
                offset: available,
            });
        }

        // Read the whole table in one request
        let mut data = vec![0u8; size as usize];
        self.reader
            .read_exact_at(offset as u64, &mut data, what)
            .await?;
        Ok(data)
    }

    fn parse_dir_entry(&self, cursor: &mut Cursor<&[u8]>, index: usize) -> Result<DirEntry> {
        let num_files = cursor.read_u16::<LittleEndian>()?;
        let entry_size = cursor.read_u16::<LittleEndian>()?;
        let name_size = cursor.read_u16::<LittleEndian>()?;
        let name = self.read_name(cursor, name_size as usize, DIRECTORY_TABLE, index)?;
        let unused = cursor.read_u32::<LittleEndian>()?;

        check_entry_size(
            DIRECTORY_TABLE,
            index,
            entry_size as u64,
            DirEntry::FIXED_SIZE + name_size as u64,
        )?;

        Ok(DirEntry {
            num_files,
            entry_size,
            name_size,
            name,
            unused,
        })
    }

    fn parse_file_entry(&self, cursor: &mut Cursor<&[u8]>, index: usize) -> Result<FileEntry> {
        let end_part_id = cursor.read_u8()?;
        let dir_id = cursor.read_u16::<LittleEndian>()?;
        let original_size = cursor.read_u32::<LittleEndian>()?;
        let compacted_size = cursor.read_u32::<LittleEndian>()?;
        let data_offset = cursor.read_u32::<LittleEndian>()?;
        let date = DosDateTime(cursor.read_u32::<LittleEndian>()?);
        let attribs = cursor.read_u32::<LittleEndian>()?;
        let entry_size = cursor.read_u16::<LittleEndian>()?;
        let flags = cursor.read_u16::<LittleEndian>()?;
        let pad = cursor.read_u8()?;
        let start_part_id = cursor.read_u8()?;
        let name_size = cursor.read_u8()?;
        let name = self.read_name(cursor, name_size as usize, FILE_TABLE, index)?;
        let version_ms = cursor.read_u32::<LittleEndian>()?;
        let version_ls = cursor.read_u32::<LittleEndian>()?;
        let unused = cursor.read_u32::<LittleEndian>()?;

        check_entry_size(
            FILE_TABLE,
            index,
            entry_size as u64,
            FileEntry::FIXED_SIZE + name_size as u64,
        )?;

        Ok(FileEntry {
            end_part_id,
            dir_id,
            original_size,
            compacted_size,
            data_offset,
            date,
            attribs,
            entry_size,
            flags,
            pad,
            start_part_id,
            name_size,
            name,
            version_ms,
            version_ls,
            unused,
        })
    }

    /// Read a NUL-terminated name of `len` bytes plus the terminator.
    fn read_name(
        &self,
        cursor: &mut Cursor<&[u8]>,
        len: usize,
        table: &'static str,
        index: usize,
    ) -> Result<String> {
        let mut bytes = vec![0u8; len + 1];
        cursor.read_exact(&mut bytes)?;
        if bytes[len] != 0 {
            return Err(Error::UnterminatedName { table, index });
        }
        let (name, _) = self.encoding.decode_without_bom_handling(&bytes[..len]);
        Ok(name.into_owned())
    }
}

/// Turn an end-of-buffer while walking a table into a table error.
fn truncated(err: Error, table: &'static str, index: usize) -> Error {
    match err {
        Error::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Error::CorruptTable {
            table,
            reason: format!("entry {index} runs past the end of the table"),
        },
        other => other,
    }
}

fn check_entry_size(table: &'static str, index: usize, declared: u64, expected: u64) -> Result<()> {
    if declared != expected {
        return Err(Error::EntrySizeMismatch {
            table,
            index,
            declared,
            expected,
        });
    }
    Ok(())
}

fn check_table_size(table: &'static str, consumed: u64, declared: u32) -> Result<()> {
    if consumed != declared as u64 {
        return Err(Error::TableSizeMismatch {
            table,
            consumed,
            declared: declared as u64,
        });
    }
    Ok(())
}
