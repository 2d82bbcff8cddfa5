// SPDX-License-Identifier: MPL-2.0
//! Build-time copy of the paper PDF and figures into the served directory.
//!
//! The source document lands at `<public_dir>/<file name>` and every image
//! under the asset directory at `<public_dir>/<asset dir name>/<relative
//! path>`. A file is skipped when the destination already has the same size
//! and a modification time at least as recent as the source; otherwise it
//! is copied and the source's access and modification times are applied to
//! the copy, so repeated runs are no-ops.

use crate::config::{resolve_against, Config, ALLOWED_ASSET_EXTENSIONS};
use crate::error::SyncError;
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolved source and destination paths of one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    root: PathBuf,
    public_dir: PathBuf,
    document: PathBuf,
    document_required: bool,
    asset_dir: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Copied files, relative to the project root where possible.
    pub changed: Vec<PathBuf>,
    /// Soft problems that did not stop the run.
    pub warnings: Vec<String>,
}

impl SyncPlan {
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        public_dir: impl Into<PathBuf>,
        document: impl Into<PathBuf>,
        asset_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root: root.into(),
            public_dir: public_dir.into(),
            document: document.into(),
            document_required: true,
            asset_dir: asset_dir.into(),
        }
    }

    /// Resolves the configured locations against `root`.
    #[must_use]
    pub fn from_config(root: &Path, config: &Config) -> Self {
        Self::new(
            root,
            resolve_against(root, &config.site.public_dir),
            resolve_against(root, &config.sync.source_document),
            resolve_against(root, &config.sync.asset_dir),
        )
        .with_document_required(config.sync.document_required)
    }

    /// When false, a missing source document is only a warning.
    #[must_use]
    pub fn with_document_required(mut self, required: bool) -> Self {
        self.document_required = required;
        self
    }

    fn document_dest(&self) -> PathBuf {
        match self.document.file_name() {
            Some(name) => self.public_dir.join(name),
            None => self.public_dir.join(crate::config::DEFAULT_SOURCE_DOCUMENT),
        }
    }

    fn asset_dest(&self) -> PathBuf {
        match self.asset_dir.file_name() {
            Some(name) => self.public_dir.join(name),
            None => self.public_dir.join(crate::config::DEFAULT_ASSET_DIR),
        }
    }

    fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    /// Runs the sync.
    ///
    /// # Errors
    ///
    /// Fails on a missing required document or on any filesystem error.
    pub fn run(&self) -> Result<SyncReport, SyncError> {
        let mut report = SyncReport::default();

        let document_present = self.document.is_file();
        if !document_present {
            if self.document_required {
                return Err(SyncError::MissingDocument(self.document.clone()));
            }
            report.warnings.push(format!(
                "Source document not found at {}; skipping document sync",
                self.document.display()
            ));
        }

        fs::create_dir_all(&self.public_dir).map_err(|e| SyncError::io(&self.public_dir, &e))?;

        if document_present {
            let dest = self.document_dest();
            if copy_if_changed(&self.document, &dest)? {
                report.changed.push(self.display_path(&dest));
            }
        }

        if self.asset_dir.is_dir() {
            self.sync_assets(&mut report)?;
        } else {
            report.warnings.push(format!(
                "Asset directory not found at {}; skipping figures",
                self.asset_dir.display()
            ));
        }

        for warning in &report.warnings {
            tracing::warn!("{warning}");
        }
        if !report.changed.is_empty() {
            tracing::info!("Synced {} file(s)", report.changed.len());
            for path in &report.changed {
                tracing::info!("- {}", path.display());
            }
        }

        Ok(report)
    }

    fn sync_assets(&self, report: &mut SyncReport) -> Result<(), SyncError> {
        let dest_dir = self.asset_dest();

        for entry in WalkDir::new(&self.asset_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.asset_dir).to_path_buf();
                SyncError::Io {
                    path,
                    message: e.to_string(),
                }
            })?;

            if !entry.file_type().is_file() || !is_allowed_asset(entry.path()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.asset_dir)
                .unwrap_or(entry.path());
            let dest = dest_dir.join(relative);
            if copy_if_changed(entry.path(), &dest)? {
                report.changed.push(self.display_path(&dest));
            }
        }
        Ok(())
    }
}

/// True for files whose lowercase extension is an allowed image type.
#[must_use]
pub fn is_allowed_asset(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| ALLOWED_ASSET_EXTENSIONS.contains(&ext.as_str()))
}

/// Copies `source` to `dest` unless `dest` is already up to date.
///
/// Returns whether a copy happened.
///
/// # Errors
///
/// Fails when the source is missing or any filesystem operation fails.
pub fn copy_if_changed(source: &Path, dest: &Path) -> Result<bool, SyncError> {
    let src_meta = fs::metadata(source).map_err(|e| SyncError::io(source, &e))?;
    let src_modified = src_meta.modified().map_err(|e| SyncError::io(source, &e))?;

    if let Ok(dst_meta) = fs::metadata(dest) {
        let up_to_date = dst_meta.len() == src_meta.len()
            && dst_meta
                .modified()
                .is_ok_and(|dst_modified| dst_modified >= src_modified);
        if up_to_date {
            return Ok(false);
        }
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, &e))?;
    }
    fs::copy(source, dest).map_err(|e| SyncError::io(dest, &e))?;

    let src_accessed = src_meta.accessed().unwrap_or(src_modified);
    let times = FileTimes::new()
        .set_accessed(src_accessed)
        .set_modified(src_modified);
    File::options()
        .write(true)
        .open(dest)
        .and_then(|file| file.set_times(times))
        .map_err(|e| SyncError::io(dest, &e))?;

    tracing::debug!(source = %source.display(), dest = %dest.display(), "asset copied");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn write(path: &Path, contents: &[u8]) {
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, contents).expect("write");
    }

    fn set_mtime(path: &Path, time: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .and_then(|f| f.set_times(FileTimes::new().set_modified(time)))
            .expect("set mtime");
    }

    #[test]
    fn allowed_extensions_are_case_insensitive() {
        assert!(is_allowed_asset(Path::new("fig.PNG")));
        assert!(is_allowed_asset(Path::new("a/b/c.jpeg")));
        assert!(is_allowed_asset(Path::new("x.svg")));
        assert!(!is_allowed_asset(Path::new("notes.txt")));
        assert!(!is_allowed_asset(Path::new("README")));
        assert!(!is_allowed_asset(Path::new("paper.pdf")));
    }

    #[test]
    fn copy_if_changed_copies_once_and_keeps_mtime() {
        let dir = tempdir().expect("temp dir");
        let source = dir.path().join("src.png");
        let dest = dir.path().join("out/nested/dst.png");
        write(&source, b"png-bytes");

        assert!(copy_if_changed(&source, &dest).expect("first copy"));
        assert!(!copy_if_changed(&source, &dest).expect("second copy"));

        let src_mtime = fs::metadata(&source).and_then(|m| m.modified()).expect("src");
        let dst_mtime = fs::metadata(&dest).and_then(|m| m.modified()).expect("dst");
        assert_eq!(src_mtime, dst_mtime);
    }

    #[test]
    fn older_destination_with_same_size_is_refreshed() {
        let dir = tempdir().expect("temp dir");
        let source = dir.path().join("a.png");
        let dest = dir.path().join("b.png");
        write(&source, b"new!");
        write(&dest, b"old!");
        set_mtime(&dest, SystemTime::now() - Duration::from_secs(3600));

        assert!(copy_if_changed(&source, &dest).expect("copy"));
        assert_eq!(fs::read(&dest).expect("read"), b"new!");
    }

    #[test]
    fn newer_destination_with_same_size_is_skipped() {
        let dir = tempdir().expect("temp dir");
        let source = dir.path().join("a.png");
        let dest = dir.path().join("b.png");
        write(&source, b"1234");
        write(&dest, b"abcd");
        set_mtime(&source, SystemTime::now() - Duration::from_secs(3600));

        assert!(!copy_if_changed(&source, &dest).expect("skip"));
        assert_eq!(fs::read(&dest).expect("read"), b"abcd");
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let err = copy_if_changed(&dir.path().join("nope.png"), &dir.path().join("out.png"))
            .expect_err("missing source");
        assert!(matches!(err, SyncError::Io { .. }));
    }

    #[test]
    fn destinations_mirror_source_names() {
        let plan = SyncPlan::new("/repo", "/repo/public", "/repo/simVLA.pdf", "/repo/paper");
        assert_eq!(plan.document_dest(), PathBuf::from("/repo/public/simVLA.pdf"));
        assert_eq!(plan.asset_dest(), PathBuf::from("/repo/public/paper"));
        assert_eq!(
            plan.display_path(Path::new("/repo/public/paper/a.png")),
            PathBuf::from("public/paper/a.png")
        );
    }

    #[test]
    fn plan_from_config_resolves_relative_paths() {
        let mut config = Config::default();
        config.sync.document_required = false;
        let plan = SyncPlan::from_config(Path::new("/repo"), &config);
        assert_eq!(plan.public_dir, PathBuf::from("/repo/public"));
        assert_eq!(plan.document, PathBuf::from("/repo/simVLA.pdf"));
        assert_eq!(plan.asset_dir, PathBuf::from("/repo/paper"));
        assert!(!plan.document_required);
    }
}
