//! InstallShield 3.0 archive parsing and extraction.
//!
//! ## Architecture
//!
//! - [`structures`]: on-disk records (header, directory and file entries)
//! - [`parser`]: low-level parsing of those records from a [`ReadAt`](crate::io::ReadAt) source
//! - [`container`]: one parsed part file and the lookup of its siblings
//! - [`extractor`]: reassembling an entry's data across parts
//!
//! ## Format Overview
//!
//! A `.Z` archive may be split over several part files named after the
//! first one with the part number as extension (`data.1`, `data.2`, ...).
//! Every part starts with the same fixed header, which locates a directory
//! table and a file table at the end of that part. File data sits between
//! the header and the tables, either stored or imploded with the PKWARE
//! DCL (see [`crate::explode`]).
//!
//! A file may start in one part and continue at offset 255 of the next
//! ones. Only the first part and the parts at or after a file's last part
//! carry trustworthy offsets for it, so extraction works from part 1.

pub mod container;
pub mod extractor;
pub mod parser;
pub mod structures;

pub use container::{ArchiveContainer, Part};
pub use parser::ArchiveParser;
pub use structures::*;
