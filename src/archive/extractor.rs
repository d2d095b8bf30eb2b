use filetime::FileTime;
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::error::{Error, ExplodeError, Result};
use crate::explode::ExplodeDecoder;
use crate::io::ReadAt;

use super::container::ArchiveContainer;
use super::structures::{ArchiveHeader, CONTINUATION_DATA_OFFSET, FileEntry};

/// Size of the chunks copied from a part into the output.
const CHUNK_SIZE: usize = 16 * 1024;

/// How entry data turns into file contents.
enum DataFilter {
    Stored,
    Imploded(ExplodeDecoder),
}

impl DataFilter {
    fn for_entry(entry: &FileEntry) -> Self {
        if entry.is_stored() {
            DataFilter::Stored
        } else {
            DataFilter::Imploded(ExplodeDecoder::new())
        }
    }

    fn process<'a>(&mut self, chunk: &'a [u8]) -> std::result::Result<Cow<'a, [u8]>, ExplodeError> {
        match self {
            DataFilter::Stored => Ok(Cow::Borrowed(chunk)),
            DataFilter::Imploded(decoder) => Ok(Cow::Owned(decoder.feed(chunk)?)),
        }
    }

    fn finish(&self) -> std::result::Result<(), ExplodeError> {
        match self {
            DataFilter::Stored => Ok(()),
            DataFilter::Imploded(decoder) => decoder.finish(),
        }
    }
}

/// Byte range of `entry`'s data inside part `part_id`, described by `header`.
///
/// The first part starts at the entry's data offset, later parts right
/// after the reserved header area. A file that spans parts fills a middle
/// part up to its directory table and the last part up to the first
/// integral data.
pub fn part_range(
    entry: &FileEntry,
    header: &ArchiveHeader,
    part_id: u8,
    path: &str,
) -> Result<(u64, u64)> {
    let start = if part_id == entry.start_part_id {
        entry.data_offset as u64
    } else {
        CONTINUATION_DATA_OFFSET
    };

    if !entry.is_split() {
        return Ok((start, entry.compacted_size as u64));
    }

    let (end, what) = if part_id == entry.end_part_id {
        (header.start_integral_data as u64, "start of integral data")
    } else {
        (header.dirs_list_offset as u64, "directory table offset")
    };
    let length = end.checked_sub(start).ok_or_else(|| Error::InvalidDataRange {
        path: path.to_string(),
        part_id,
        reason: format!("{what} {end} is before data start {start}"),
    })?;
    Ok((start, length))
}

/// Join an archive path under `root`, refusing anything that would escape it.
pub fn destination_path(root: &Path, archive_path: &str) -> Result<PathBuf> {
    let unsafe_path = || Error::UnsafePath {
        path: archive_path.to_string(),
    };

    let mut path = root.to_path_buf();
    let mut pushed = false;
    for part in archive_path.split(['/', '\\']) {
        let mut components = Path::new(part).components();
        match (components.next(), components.next()) {
            (None, _) | (Some(Component::CurDir), None) => {}
            (Some(Component::Normal(name)), None) => {
                path.push(name);
                pushed = true;
            }
            _ => return Err(unsafe_path()),
        }
    }
    if !pushed {
        return Err(unsafe_path());
    }
    Ok(path)
}

fn temporary_path(output_path: &Path) -> PathBuf {
    let name = output_path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    output_path.with_file_name(format!(".{name}.runshield-tmp"))
}

impl ArchiveContainer {
    /// Extract `entry` under `dest_root`, returning the written path.
    ///
    /// `entry` must come from this container's file table, and this
    /// container must be one whose table is authoritative for it (see
    /// [`FileEntry::is_valid_for_extraction`]). Data is written to a
    /// temporary file that only replaces the destination once the sizes
    /// check out.
    pub async fn extract(&self, entry: &FileEntry, dest_root: &Path) -> Result<PathBuf> {
        let archive_path = self.entry_path(entry);
        if !entry.is_valid_for_extraction(self.header()) {
            return Err(Error::NotExtractable {
                path: archive_path,
                part_id: self.header().part_id,
            });
        }

        let output_path = destination_path(dest_root, &archive_path)?;
        // Create parent directories if needed
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = temporary_path(&output_path);
        if let Err(e) = self.write_entry(entry, &archive_path, &temp_path).await {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                debug!(path = %temp_path.display(), error = %cleanup, "could not remove temporary file");
            }
            return Err(e);
        }
        fs::rename(&temp_path, &output_path).await?;

        restore_metadata(entry, &output_path).await?;
        info!(path = %output_path.display(), size = entry.original_size, "extracted");
        Ok(output_path)
    }

    async fn write_entry(&self, entry: &FileEntry, archive_path: &str, output: &Path) -> Result<()> {
        let explode_error = |source| Error::Explode {
            path: archive_path.to_string(),
            source,
        };

        let mut file = fs::File::create(output).await?;
        let mut filter = DataFilter::for_entry(entry);
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut read_size = 0u64;
        let mut written_size = 0u64;

        for part_id in entry.start_part_id..=entry.end_part_id {
            let part = self.get_part(part_id).await?;
            let (start, length) = part_range(entry, part.header(), part_id, archive_path)?;
            debug!(
                path = archive_path,
                part = part_id,
                start,
                length,
                "copying entry data"
            );

            let mut offset = start;
            let mut remaining = length;
            while remaining > 0 {
                let n = remaining.min(CHUNK_SIZE as u64) as usize;
                part.reader()
                    .read_exact_at(offset, &mut buf[..n], "file data")
                    .await?;
                let out = filter.process(&buf[..n]).map_err(explode_error)?;
                file.write_all(&out).await?;
                written_size += out.len() as u64;
                offset += n as u64;
                remaining -= n as u64;
            }
            read_size += length;
        }

        // An empty range holds no stream, so there is no end marker to expect
        if read_size > 0 {
            filter.finish().map_err(explode_error)?;
        }
        file.flush().await?;
        drop(file);

        if read_size != entry.compacted_size as u64 {
            return Err(Error::CompactedSizeMismatch {
                path: archive_path.to_string(),
                actual: read_size,
                expected: entry.compacted_size as u64,
            });
        }
        if written_size != entry.original_size as u64 {
            return Err(Error::OriginalSizeMismatch {
                path: archive_path.to_string(),
                actual: written_size,
                expected: entry.original_size as u64,
            });
        }
        Ok(())
    }
}

/// Apply the entry's modification time and read-only bit to `path`.
async fn restore_metadata(entry: &FileEntry, path: &Path) -> Result<()> {
    match entry.date.to_unix_local() {
        Some(seconds) => filetime::set_file_mtime(path, FileTime::from_unix_time(seconds, 0))?,
        None => warn!(path = %path.display(), date = entry.date.0, "invalid timestamp, mtime not restored"),
    }

    // Read-only is the only attribute that maps portably
    if entry.is_read_only() {
        let mut permissions = fs::metadata(path).await?.permissions();
        permissions.set_readonly(true);
        fs::set_permissions(path, permissions).await?;
    }
    Ok(())
}
