use crate::arguments::Arguments;
use crate::errors::BumpError;
use crate::manifest::{Manifest, default_manifest_path};
use anyhow::Result;
use log::{debug, info, warn};
use semver::Version;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Outcome of a run, mapped one-to-one onto the process exit code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Success,
    VersionFieldNotFound,
    Usage,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::VersionFieldNotFound => 1,
            Status::Usage => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

pub struct VersionBumper {
    manifest_path: PathBuf,
}

impl Default for VersionBumper {
    fn default() -> Self {
        VersionBumper::new(default_manifest_path())
    }
}

impl VersionBumper {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        VersionBumper { manifest_path: manifest_path.into() }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Rewrites the first version field to `version` and returns the value it replaced.
    ///
    /// The file is only written once the new contents are fully built.
    pub fn bump(&self, version: &str) -> Result<String, BumpError> {
        if let Err(err) = Version::parse(version) {
            warn!("'{}' is not a semver version ({}), writing it verbatim", version, err);
        }

        let mut manifest = Manifest::load(&self.manifest_path)?;
        let previous = manifest.set_version(version)?;
        manifest.save()?;

        info!("Bumped {} from {} to {}", self.manifest_path.display(), previous, version);
        Ok(previous)
    }
}

/// Runs the tool against already-parsed arguments.
///
/// Usage and missing-field problems are reported on `stderr` and turned into a
/// [`Status`]; I/O failures are returned as errors.
pub fn run(
    arguments: &Arguments,
    program: &str,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<Status> {
    let Some(version) = arguments.new_version() else {
        debug!("Expected one version, got {:?}", arguments.versions);
        let usage = BumpError::Usage { program: program.to_string() };
        writeln!(stderr, "{usage}")?;
        return Ok(Status::Usage);
    };

    let bumper = match &arguments.manifest_path {
        Some(path) => VersionBumper::new(path),
        None => VersionBumper::default(),
    };

    match bumper.bump(version) {
        Ok(_) => {
            writeln!(
                stdout,
                "Updated {} to version {}",
                bumper.manifest_path().display(),
                version
            )?;
            Ok(Status::Success)
        }
        Err(err @ BumpError::VersionFieldNotFound(_)) => {
            writeln!(stderr, "{err}")?;
            Ok(Status::VersionFieldNotFound)
        }
        Err(err) => Err(err.into()),
    }
}
