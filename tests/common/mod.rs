//! Builders for synthetic InstallShield part files.

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use std::path::{Path, PathBuf};

pub const RAW_AIAI: &[u8] = &[0x00, 0x04, 0x82, 0x24, 0x25, 0x8F, 0x80, 0x7F];
pub const AIAI: &[u8] = b"AIAIAIAIAIAIA";

pub const HELLO_IMPLODED: &[u8] = &[
    0x01, 0x06, 0x50, 0x6C, 0xD3, 0xD4, 0x3D, 0xBC, 0xAE, 0x99, 0x74, 0x50, 0x7A, 0x28, 0x3A,
    0xBC, 0x77, 0x34, 0xDB, 0x83, 0xD3, 0x65, 0x7C, 0xAF, 0xE8, 0x74, 0x07, 0x1C, 0x88, 0x7B,
    0x16, 0xC5, 0x52, 0xFD, 0x17, 0x1C, 0x0F, 0xC1, 0xD6, 0xC0, 0xF9, 0xB5, 0x31, 0xA8, 0x1B,
    0xB4, 0xC1, 0x2B, 0x78, 0x01, 0xFF,
];
pub const HELLO: &[u8] = b"Hello world! How are you, today? This is a very long text.";

pub const MAGIC: u32 = 0x8C65_5D13;
pub const HEADER_END: usize = 63;

pub const FLAG_STORED: u16 = 0x10;
pub const FLAG_SPANS: u16 = 0x100;
pub const ATTR_READ_ONLY: u32 = 0x1;
pub const ATTR_ARCHIVE: u32 = 0x20;

/// Pack a date and time the MS-DOS way, date in the low half.
pub fn dos_datetime(year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> u32 {
    let date = ((year - 1980) << 9) | (month << 5) | day;
    let time = (hour << 11) | (minute << 5) | (second / 2);
    date | (time << 16)
}

#[derive(Debug, Clone)]
pub struct FileSpec {
    pub name: String,
    pub dir_id: u16,
    pub original_size: u32,
    pub compacted_size: u32,
    pub data_offset: u32,
    pub date: u32,
    pub attribs: u32,
    pub flags: u16,
    pub start_part: u8,
    pub end_part: u8,
}

impl FileSpec {
    pub fn new(name: &str, dir_id: u16) -> Self {
        Self {
            name: name.to_string(),
            dir_id,
            original_size: 0,
            compacted_size: 0,
            data_offset: 0,
            date: dos_datetime(2001, 6, 30, 12, 34, 56),
            attribs: ATTR_ARCHIVE,
            flags: 0,
            start_part: 1,
            end_part: 1,
        }
    }

    pub fn stored(mut self, offset: usize, data: &[u8]) -> Self {
        self.flags |= FLAG_STORED;
        self.data_offset = offset as u32;
        self.original_size = data.len() as u32;
        self.compacted_size = data.len() as u32;
        self
    }

    pub fn imploded(mut self, offset: usize, compressed: &[u8], original: &[u8]) -> Self {
        self.data_offset = offset as u32;
        self.original_size = original.len() as u32;
        self.compacted_size = compressed.len() as u32;
        self
    }

    pub fn parts(mut self, start: u8, end: u8) -> Self {
        self.start_part = start;
        self.end_part = end;
        if start != end {
            self.flags |= FLAG_SPANS;
        }
        self
    }
}

/// One part file: header, data written at chosen offsets, then the tables.
pub struct PartBuilder {
    flags: u16,
    total_parts: u8,
    part_id: u8,
    body: Vec<u8>,
    start_integral_data: Option<u32>,
    dirs: Vec<Vec<u8>>,
    files: Vec<FileSpec>,
    header_size: u8,
    magic: u32,
}

impl PartBuilder {
    pub fn unsplit() -> Self {
        Self::new(0, 1, 1)
    }

    pub fn split(part_id: u8, total_parts: u8) -> Self {
        Self::new(0x1, total_parts, part_id)
    }

    fn new(flags: u16, total_parts: u8, part_id: u8) -> Self {
        Self {
            flags,
            total_parts,
            part_id,
            body: vec![0u8; HEADER_END],
            start_integral_data: None,
            dirs: Vec::new(),
            files: Vec::new(),
            header_size: 0x3A,
            magic: MAGIC,
        }
    }

    /// Current end of the data area.
    pub fn end(&self) -> usize {
        self.body.len()
    }

    /// Write `data` at `offset`, padding with zeros up to it.
    pub fn data_at(mut self, offset: usize, data: &[u8]) -> Self {
        if self.body.len() < offset + data.len() {
            self.body.resize(offset + data.len(), 0);
        }
        self.body[offset..offset + data.len()].copy_from_slice(data);
        self
    }

    pub fn start_integral_data(mut self, offset: usize) -> Self {
        self.start_integral_data = Some(offset as u32);
        self
    }

    pub fn dir(self, name: &str) -> Self {
        self.dir_raw(name.as_bytes())
    }

    /// Directory whose name is already encoded.
    pub fn dir_raw(mut self, name: &[u8]) -> Self {
        self.dirs.push(name.to_vec());
        self
    }

    pub fn file(mut self, file: FileSpec) -> Self {
        self.files.push(file);
        self
    }

    pub fn magic(mut self, magic: u32) -> Self {
        self.magic = magic;
        self
    }

    pub fn header_size(mut self, size: u8) -> Self {
        self.header_size = size;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_with(|_, _| {})
    }

    /// Build, letting `patch` tamper with the serialized directory and
    /// file tables before they are placed.
    pub fn build_with(&self, patch: impl FnOnce(&mut Vec<u8>, &mut Vec<u8>)) -> Vec<u8> {
        let mut dir_table = Vec::new();
        for name in &self.dirs {
            dir_table.write_u16::<LittleEndian>(0).unwrap();
            dir_table
                .write_u16::<LittleEndian>(11 + name.len() as u16)
                .unwrap();
            dir_table.write_u16::<LittleEndian>(name.len() as u16).unwrap();
            dir_table.extend_from_slice(name);
            dir_table.push(0);
            dir_table.write_u32::<LittleEndian>(0).unwrap();
        }

        let mut file_table = Vec::new();
        for f in &self.files {
            file_table.write_u8(f.end_part).unwrap();
            file_table.write_u16::<LittleEndian>(f.dir_id).unwrap();
            file_table.write_u32::<LittleEndian>(f.original_size).unwrap();
            file_table.write_u32::<LittleEndian>(f.compacted_size).unwrap();
            file_table.write_u32::<LittleEndian>(f.data_offset).unwrap();
            file_table.write_u32::<LittleEndian>(f.date).unwrap();
            file_table.write_u32::<LittleEndian>(f.attribs).unwrap();
            file_table
                .write_u16::<LittleEndian>(43 + f.name.len() as u16)
                .unwrap();
            file_table.write_u16::<LittleEndian>(f.flags).unwrap();
            file_table.write_u8(0).unwrap();
            file_table.write_u8(f.start_part).unwrap();
            file_table.write_u8(f.name.len() as u8).unwrap();
            file_table.extend_from_slice(f.name.as_bytes());
            file_table.push(0);
            file_table.write_u32::<LittleEndian>(0).unwrap();
            file_table.write_u32::<LittleEndian>(0).unwrap();
            file_table.write_u32::<LittleEndian>(0).unwrap();
        }

        patch(&mut dir_table, &mut file_table);

        let mut out = self.body.clone();
        let dirs_offset = out.len() as u32;
        out.extend_from_slice(&dir_table);
        let files_offset = out.len() as u32;
        out.extend_from_slice(&file_table);

        let mut header = Vec::with_capacity(HEADER_END);
        header.write_u32::<LittleEndian>(self.magic).unwrap();
        header.write_u8(self.header_size).unwrap();
        header.write_u8(0).unwrap(); // to1
        header.write_u8(0).unwrap(); // to2
        header.write_u16::<LittleEndian>(0).unwrap();
        header.write_u8(0).unwrap(); // password
        header.write_u16::<LittleEndian>(self.flags).unwrap();
        header
            .write_u16::<LittleEndian>(self.files.len() as u16)
            .unwrap();
        header
            .write_u32::<LittleEndian>(dos_datetime(2001, 7, 1, 8, 0, 0))
            .unwrap();
        header.write_u32::<LittleEndian>(out.len() as u32).unwrap();
        header.write_u32::<LittleEndian>(0).unwrap();
        header.write_u32::<LittleEndian>(0).unwrap();
        header.write_u8(self.total_parts).unwrap();
        header.write_u8(self.part_id).unwrap();
        header.write_u8(0).unwrap();
        header.write_u32::<LittleEndian>(dirs_offset).unwrap(); // end of integral data
        header
            .write_u32::<LittleEndian>(self.start_integral_data.unwrap_or(dirs_offset))
            .unwrap();
        header.write_u32::<LittleEndian>(dirs_offset).unwrap();
        header
            .write_u32::<LittleEndian>(dir_table.len() as u32)
            .unwrap();
        header
            .write_u16::<LittleEndian>(self.dirs.len() as u16)
            .unwrap();
        header.write_u32::<LittleEndian>(files_offset).unwrap();
        header
            .write_u32::<LittleEndian>(file_table.len() as u32)
            .unwrap();
        header.write_u32::<LittleEndian>(0).unwrap();
        assert_eq!(header.len(), HEADER_END);

        out[..HEADER_END].copy_from_slice(&header);
        out
    }

    pub fn write(&self, path: &Path) -> PathBuf {
        std::fs::write(path, self.build()).unwrap();
        path.to_path_buf()
    }
}
