use encoding_rs::Encoding;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::io::LocalFileReader;

use super::parser::ArchiveParser;
use super::structures::{ArchiveHeader, DirEntry, FileEntry};

/// One physical part file of an archive, fully parsed on open.
pub struct ArchiveContainer {
    path: PathBuf,
    encoding: &'static Encoding,
    reader: Arc<LocalFileReader>,
    header: ArchiveHeader,
    dirs: Vec<DirEntry>,
    files: Vec<FileEntry>,
}

/// A part resolved by [`ArchiveContainer::get_part`].
pub enum Part<'a> {
    /// The container the lookup started from.
    Current(&'a ArchiveContainer),
    /// A sibling part file opened for the caller.
    Sibling(ArchiveContainer),
}

impl Deref for Part<'_> {
    type Target = ArchiveContainer;

    fn deref(&self) -> &ArchiveContainer {
        match self {
            Part::Current(container) => container,
            Part::Sibling(container) => container,
        }
    }
}

impl ArchiveContainer {
    /// Open a part file and parse its header, directories and files.
    ///
    /// `encoding` is a WHATWG label such as `windows-1252` or `shift_jis`.
    pub async fn open(path: &Path, encoding: &str) -> Result<Self> {
        let encoding = Encoding::for_label(encoding.as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(encoding.to_string()))?;
        Self::open_with(path, encoding).await
    }

    #[instrument(skip(encoding), fields(encoding = encoding.name()))]
    async fn open_with(path: &Path, encoding: &'static Encoding) -> Result<Self> {
        let reader = Arc::new(LocalFileReader::new(path)?);
        let parser = ArchiveParser::new(reader.clone(), encoding);

        let header = parser.read_header().await?;
        let dirs = parser.read_directories(&header).await?;
        let files = parser.read_files(&header, &dirs).await?;
        debug!(dirs = dirs.len(), files = files.len(), "opened archive part");

        Ok(Self {
            path: path.to_path_buf(),
            encoding,
            reader,
            header,
            dirs,
            files,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &ArchiveHeader {
        &self.header
    }

    pub fn directories(&self) -> &[DirEntry] {
        &self.dirs
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub(crate) fn reader(&self) -> &Arc<LocalFileReader> {
        &self.reader
    }

    /// Directory owning `entry`.
    pub fn directory(&self, entry: &FileEntry) -> &DirEntry {
        // Indices are checked against the table when the archive is parsed.
        &self.dirs[entry.dir_id as usize]
    }

    /// Path of `entry` inside the archive, with forward slashes.
    pub fn entry_path(&self, entry: &FileEntry) -> String {
        let dir = self.directory(entry).path();
        if dir.is_empty() {
            entry.name.clone()
        } else {
            format!("{}/{}", dir.trim_end_matches('/'), entry.name)
        }
    }

    /// Path of the sibling file holding part `part_id`.
    ///
    /// Parts share a base name and use the part number as extension.
    pub fn part_path(&self, part_id: u8) -> PathBuf {
        self.path.with_extension(part_id.to_string())
    }

    /// Resolve part `part_id` of this archive.
    ///
    /// Unsplit archives and the part already loaded resolve to `self`;
    /// any other part is opened and parsed fresh on every call.
    pub async fn get_part(&self, part_id: u8) -> Result<Part<'_>> {
        if !self.header.is_split() || self.header.part_id == part_id {
            return Ok(Part::Current(self));
        }
        let path = self.part_path(part_id);
        debug!(part = part_id, path = %path.display(), "opening sibling part");
        let opened = Self::open_with(&path, self.encoding).await;
        match opened {
            Ok(part) => Ok(Part::Sibling(part)),
            Err(Error::Io(source)) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::MissingPart {
                    part_id,
                    path,
                    source,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Entries to act on when this part was the one requested.
    ///
    /// With `all` every entry of `entries` is kept. Otherwise an entry must
    /// have data in this part, and a file spanning parts is only kept when
    /// it comes first, so it is reported once across the whole family.
    pub fn select<'a>(&self, entries: &'a [FileEntry], all: bool) -> Vec<&'a FileEntry> {
        let mut selected = Vec::new();
        for entry in entries {
            if all || (entry.is_in_part(&self.header) && (!entry.is_split() || selected.is_empty()))
            {
                selected.push(entry);
            }
        }
        selected
    }
}
