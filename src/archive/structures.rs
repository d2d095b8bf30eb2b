use byteorder::{LittleEndian, ReadBytesExt};
use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use std::io::Cursor;

use crate::error::{Error, Result};

/// Split flag bits in [`ArchiveHeader::flags`].
pub const FLAG_SPLIT: u16 = 0x1;
pub const FLAG_SPLIT_CONTIGUOUS: u16 = 0x2;

/// Flag bits in [`FileEntry::flags`].
pub const FILE_FLAG_STORED: u16 = 0x10;
pub const FILE_FLAG_SPANS_PARTS: u16 = 0x100;

/// Attribute bits in [`FileEntry::attribs`].
pub const ATTR_READ_ONLY: u32 = 0x1;
pub const ATTR_HIDDEN: u32 = 0x2;
pub const ATTR_SYSTEM: u32 = 0x4;
pub const ATTR_ARCHIVE: u32 = 0x20;

/// Offset at which a continuation part resumes the data of a spanning
/// file; the bytes before it belong to the part header.
pub const CONTINUATION_DATA_OFFSET: u64 = 255;

/// MS-DOS packed date and time: date in the low 16 bits, time in the high 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DosDateTime(pub u32);

impl DosDateTime {
    /// Parse date to (year, month, day)
    pub fn date(&self) -> (u16, u8, u8) {
        let date = (self.0 & 0xFFFF) as u16;
        let day = (date & 0x1F) as u8;
        let month = ((date >> 5) & 0x0F) as u8;
        let year = ((date >> 9) & 0x7F) + 1980;
        (year, month, day)
    }

    /// Parse time to (hour, minute, second)
    pub fn time(&self) -> (u8, u8, u8) {
        let time = (self.0 >> 16) as u16;
        let second = ((time & 0x1F) * 2) as u8;
        let minute = ((time >> 5) & 0x3F) as u8;
        let hour = ((time >> 11) & 0x1F) as u8;
        (hour, minute, second)
    }

    /// Calendar value, or `None` for an impossible date such as month 0.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let (year, month, day) = self.date();
        let (hour, minute, second) = self.time();
        NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)?.and_hms_opt(
            hour as u32,
            minute as u32,
            second as u32,
        )
    }

    /// Seconds since the Unix epoch, reading the value as local time.
    pub fn to_unix_local(&self) -> Option<i64> {
        let naive = self.to_naive()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp())
    }
}

/// Fixed archive header at the start of every part file - 58 bytes after
/// the magic and the header size byte.
#[derive(Debug, Clone)]
pub struct ArchiveHeader {
    pub to1: u8,
    pub to2: u8,
    pub pad: u16,
    pub has_password: u8,
    pub flags: u16,
    pub num_files: u16,
    pub date: DosDateTime,
    pub original_archive_size: u32,
    pub total_original_size: u32,
    /// Size of the metadata plus the incomplete file continued from the previous part.
    pub taken: u32,
    pub total_parts: u8,
    /// Index of this part, starting at 1.
    pub part_id: u8,
    /// Total compacted size modulo 253.
    pub check_byte: u8,
    pub end_integral_data: u32,
    pub start_integral_data: u32,
    pub dirs_list_offset: u32,
    pub dirs_list_size: u32,
    pub num_dirs: u16,
    pub files_list_offset: u32,
    pub files_list_size: u32,
    pub password: u32,
}

impl ArchiveHeader {
    pub const MAGIC: u32 = 0x8C65_5D13;
    /// Value of the header size byte that follows the magic.
    pub const SIZE: u8 = 0x3A;
    /// Offset of the fixed record: magic plus the size byte.
    pub const OFFSET: u64 = 5;

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE as usize {
            return Err(Error::ShortRead {
                what: "archive header",
                offset: Self::OFFSET + data.len() as u64,
            });
        }

        let mut cursor = Cursor::new(data);

        Ok(Self {
            to1: cursor.read_u8()?,
            to2: cursor.read_u8()?,
            pad: cursor.read_u16::<LittleEndian>()?,
            has_password: cursor.read_u8()?,
            flags: cursor.read_u16::<LittleEndian>()?,
            num_files: cursor.read_u16::<LittleEndian>()?,
            date: DosDateTime(cursor.read_u32::<LittleEndian>()?),
            original_archive_size: cursor.read_u32::<LittleEndian>()?,
            total_original_size: cursor.read_u32::<LittleEndian>()?,
            taken: cursor.read_u32::<LittleEndian>()?,
            total_parts: cursor.read_u8()?,
            part_id: cursor.read_u8()?,
            check_byte: cursor.read_u8()?,
            end_integral_data: cursor.read_u32::<LittleEndian>()?,
            start_integral_data: cursor.read_u32::<LittleEndian>()?,
            dirs_list_offset: cursor.read_u32::<LittleEndian>()?,
            dirs_list_size: cursor.read_u32::<LittleEndian>()?,
            num_dirs: cursor.read_u16::<LittleEndian>()?,
            files_list_offset: cursor.read_u32::<LittleEndian>()?,
            files_list_size: cursor.read_u32::<LittleEndian>()?,
            password: cursor.read_u32::<LittleEndian>()?,
        })
    }

    /// Whether the archive is spread over several part files.
    pub fn is_split(&self) -> bool {
        self.flags & (FLAG_SPLIT | FLAG_SPLIT_CONTIGUOUS) != 0
    }

    /// Whether no single file straddles a part boundary.
    pub fn is_contiguous(&self) -> bool {
        self.flags & FLAG_SPLIT_CONTIGUOUS != 0
    }
}

/// Directory table entry - 11 bytes plus the name
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub num_files: u16,
    pub entry_size: u16,
    pub name_size: u16,
    /// Name as stored, with backslash separators.
    pub name: String,
    pub unused: u32,
}

impl DirEntry {
    pub const FIXED_SIZE: u64 = 11;

    /// Directory path with forward slashes.
    pub fn path(&self) -> String {
        self.name.replace('\\', "/")
    }
}

/// File table entry - 43 bytes plus the name
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub end_part_id: u8,
    /// Index into the owning archive's directory list.
    pub dir_id: u16,
    pub original_size: u32,
    pub compacted_size: u32,
    /// Start of the data within the part `start_part_id`.
    pub data_offset: u32,
    pub date: DosDateTime,
    pub attribs: u32,
    pub entry_size: u16,
    pub flags: u16,
    pub pad: u8,
    pub start_part_id: u8,
    pub name_size: u8,
    pub name: String,
    pub version_ms: u32,
    pub version_ls: u32,
    pub unused: u32,
}

impl FileEntry {
    pub const FIXED_SIZE: u64 = 43;

    /// Data is stored verbatim rather than imploded.
    pub fn is_stored(&self) -> bool {
        self.flags & FILE_FLAG_STORED != 0
    }

    /// Data continues over more than one part.
    pub fn is_split(&self) -> bool {
        self.flags & FILE_FLAG_SPANS_PARTS != 0
    }

    pub fn is_read_only(&self) -> bool {
        self.attribs & ATTR_READ_ONLY != 0
    }

    /// Attributes as `AHRS`, with `_` for each unset bit.
    pub fn attributes(&self) -> String {
        [
            (ATTR_ARCHIVE, 'A'),
            (ATTR_HIDDEN, 'H'),
            (ATTR_READ_ONLY, 'R'),
            (ATTR_SYSTEM, 'S'),
        ]
        .iter()
        .map(|&(bit, c)| if self.attribs & bit != 0 { c } else { '_' })
        .collect()
    }

    /// Whether any of this entry's data lives in the part described by `header`.
    pub fn is_in_part(&self, header: &ArchiveHeader) -> bool {
        if !header.is_split() {
            return true;
        }
        (self.start_part_id..=self.end_part_id).contains(&header.part_id)
    }

    /// Whether the part ranges and data offset can be trusted when the
    /// entry was read from the part described by `header`.
    ///
    /// A part that resumes a file begun earlier only knows where the file
    /// continues, so its table is authoritative only for part 1 (or an
    /// unsplit archive) and for parts at or after the file's last part.
    pub fn is_valid_for_extraction(&self, header: &ArchiveHeader) -> bool {
        header.part_id <= 1 || header.part_id >= self.end_part_id
    }
}
