use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "bump-rust-version")]
pub struct Arguments {
    /// Manifest to update instead of the codex-rs workspace Cargo.toml
    #[arg(long, short)]
    pub manifest_path: Option<PathBuf>,
    #[arg(long, short)]
    pub verbose: bool,
    /// New version; exactly one is expected. Use `--` before a version spelled like a flag
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub versions: Vec<String>,
}

impl Arguments {
    /// The requested version, or `None` unless exactly one was given.
    pub fn new_version(&self) -> Option<&str> {
        match self.versions.as_slice() {
            [version] => Some(version.as_str()),
            _ => None,
        }
    }
}

/// Name shown in the usage line: the file name of `argv[0]`.
pub fn program_name(arg0: Option<&OsStr>) -> String {
    arg0.and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
