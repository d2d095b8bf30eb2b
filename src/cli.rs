use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "runshield")]
#[command(version)]
#[command(about = "Extract InstallShield 3.0 .Z archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  runshield data.z                    extract every file into the current directory\n  \
  runshield -l data.1                 list the files held by part 1\n  \
  runshield -C out data.1 '*.dll'     extract matching files into out/")]
pub struct Cli {
    /// Archive file (any part of a split archive)
    #[arg(value_name = "ARCHIVE")]
    pub archive: String,

    /// Glob patterns selecting entries (default: all)
    #[arg(value_name = "PATTERNS")]
    pub patterns: Vec<String>,

    /// List files instead of extracting them
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Include files that have no data in the given part
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Extract files into DIR
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: String,

    /// Encoding of names stored in the archive
    #[arg(short = 'e', long = "encoding", default_value = "windows-1252")]
    pub encoding: String,

    /// Quiet mode, do not print the file table while extracting
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }
}
