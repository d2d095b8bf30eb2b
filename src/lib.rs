//! # runshield
//!
//! A Rust extractor for InstallShield 3.0 `.Z` archives.
//!
//! This library reads the archive tables of each part file, reassembles
//! file data that is split across several parts, and decompresses data
//! imploded with the PKWARE Data Compression Library.
//!
//! ## Features
//!
//! - Parse the archive header, directory table and file table
//! - Follow split archives across their numbered part files
//! - Streaming PKWARE DCL "explode" decoder fed in chunks of any size
//! - Restore modification times and the read-only attribute
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use runshield::ArchiveContainer;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let part = ArchiveContainer::open(Path::new("data.1"), "windows-1252").await?;
//!     // Part 1 holds the authoritative file table
//!     let main = part.get_part(1).await?;
//!
//!     for entry in part.select(main.files(), false) {
//!         println!("{}", main.entry_path(entry));
//!         main.extract(entry, Path::new("out")).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod explode;
pub mod io;
pub mod logging;

pub use archive::{ArchiveContainer, DirEntry, FileEntry, Part};
pub use cli::Cli;
pub use error::{Error, ExplodeError, Result};
pub use explode::ExplodeDecoder;
pub use io::{LocalFileReader, ReadAt};
