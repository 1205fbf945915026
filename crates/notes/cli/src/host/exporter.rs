//! Client-side file export into a local directory.
use std::io::Write;
use std::path::{Path, PathBuf};

use notes_core::{CapabilityError, FileExporter};

const STAGING_PREFIX: &str = ".assignment-notes-";
const STAGING_SUFFIX: &str = ".part";

/// Writes exported notes into a fixed directory.
///
/// Contents are staged in a temporary file next to the target and then
/// renamed over it, so a failed export never leaves a truncated file behind
/// and the staging file is removed on every error path.
#[derive(Clone, Debug)]
pub struct FsExporter {
    directory: PathBuf,
}

impl FsExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl FileExporter for FsExporter {
    fn export(&mut self, file_name: &str, contents: &str) -> Result<PathBuf, CapabilityError> {
        if !self.directory.is_dir() {
            return Err(CapabilityError::ExportDirectory(format!(
                "{} is not a directory",
                self.directory.display()
            )));
        }

        let mut staged = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .suffix(STAGING_SUFFIX)
            .tempfile_in(&self.directory)?;
        staged.write_all(contents.as_bytes())?;
        staged.as_file().sync_all()?;

        let target = self.directory.join(file_name);
        staged
            .persist(&target)
            .map_err(|e| CapabilityError::Io(e.error))?;

        tracing::debug!("Wrote {} bytes to {}", contents.len(), target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leftovers(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(STAGING_PREFIX))
            .collect()
    }

    #[test]
    fn writes_exact_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = FsExporter::new(dir.path());

        let path = exporter
            .export("assignment_notes.txt", "Hello world")
            .unwrap();

        assert_eq!(path, dir.path().join("assignment_notes.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hello world");
        assert!(leftovers(dir.path()).is_empty());
    }

    #[test]
    fn repeated_export_replaces_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = FsExporter::new(dir.path());

        exporter.export("assignment_notes.txt", "first draft, much longer").unwrap();
        let path = exporter.export("assignment_notes.txt", "second").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
        assert!(leftovers(dir.path()).is_empty());
    }

    #[test]
    fn preserves_unicode_and_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = FsExporter::new(dir.path());
        let notes = "Team: Alice, Bob\r\n• Théme: Corruption\n";

        let path = exporter.export("assignment_notes.txt", notes).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), notes.as_bytes());
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = FsExporter::new(dir.path().join("absent"));

        let err = exporter.export("assignment_notes.txt", "x").unwrap_err();
        assert!(matches!(err, CapabilityError::ExportDirectory(_)));
    }
}
