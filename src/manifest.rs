use crate::errors::BumpError;
use log::debug;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

/// Workspace directory, relative to the repository root, holding the manifest.
pub const WORKSPACE_DIR: &str = "codex-rs";
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Matches the first `version = "..."` line; group 2 is the value.
pub fn version_match_regex() -> Result<Regex, BumpError> {
    Ok(Regex::new(r##"(?m)^(version\s*=\s*")([^"]+)(")"##)?)
}

/// Resolves the workspace manifest relative to this tool's own location.
///
/// The tool's crate sits one directory below the repository root, so the
/// manifest is at `<crate dir>/../codex-rs/Cargo.toml`. The crate directory is
/// fixed at build time, so a copied binary still points at the checkout it was
/// built from.
pub fn default_manifest_path() -> PathBuf {
    let tool_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    tool_dir
        .parent()
        .unwrap_or(tool_dir)
        .join(WORKSPACE_DIR)
        .join(MANIFEST_FILE)
}

/// In-memory copy of a manifest file.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    contents: String,
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BumpError> {
        let path = path.as_ref().to_path_buf();
        debug!("Reading manifest: '{}'", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|source| BumpError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(Manifest { path, contents })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Value of the first version field, if any.
    pub fn current_version(&self) -> Result<Option<&str>, BumpError> {
        let version_regex = version_match_regex()?;
        Ok(version_regex
            .captures(&self.contents)
            .and_then(|captures| captures.get(2))
            .map(|value| value.as_str()))
    }

    /// Replaces the value of the first version field and returns the old one.
    ///
    /// Leaves the contents untouched when no field matches.
    pub fn set_version(&mut self, version: &str) -> Result<String, BumpError> {
        let version_regex = version_match_regex()?;
        let previous = match version_regex.captures(&self.contents) {
            Some(captures) => captures[2].to_string(),
            None => return Err(BumpError::VersionFieldNotFound(self.path.clone())),
        };

        // Closure replacer so `$` in the new version is taken literally.
        let updated = version_regex
            .replace(&self.contents, |captures: &Captures| {
                format!("{}{}{}", &captures[1], version, &captures[3])
            })
            .into_owned();
        self.contents = updated;

        debug!("Version field changed {} -> {}", previous, version);
        Ok(previous)
    }

    pub fn save(&self) -> Result<(), BumpError> {
        debug!("Writing manifest: '{}'", self.path.display());
        std::fs::write(&self.path, &self.contents).map_err(|source| BumpError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
