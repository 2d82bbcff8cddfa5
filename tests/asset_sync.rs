// SPDX-License-Identifier: MPL-2.0
use simvla_page::asset_sync::SyncPlan;
use simvla_page::error::SyncError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn write(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, contents).expect("write");
}

/// A project root with the paper PDF and a few figures.
fn project() -> TempDir {
    let dir = tempdir().expect("temp dir");
    write(&dir.path().join("simVLA.pdf"), b"%PDF-1.7");
    write(&dir.path().join("paper/fig1.png"), b"png");
    write(&dir.path().join("paper/real1.JPG"), b"jpg");
    write(&dir.path().join("paper/sub/Table1.png"), b"table");
    write(&dir.path().join("paper/notes.txt"), b"not an image");
    dir
}

fn plan(root: &Path) -> SyncPlan {
    SyncPlan::new(
        root,
        root.join("public"),
        root.join("simVLA.pdf"),
        root.join("paper"),
    )
}

#[test]
fn first_run_copies_everything_and_second_run_nothing() {
    let root = project();

    let first = plan(root.path()).run().expect("first run");
    assert_eq!(
        first.changed,
        vec![
            PathBuf::from("public/simVLA.pdf"),
            PathBuf::from("public/paper/fig1.png"),
            PathBuf::from("public/paper/real1.JPG"),
            PathBuf::from("public/paper/sub/Table1.png"),
        ]
    );
    assert!(first.warnings.is_empty());

    let second = plan(root.path()).run().expect("second run");
    assert!(second.changed.is_empty());
}

#[test]
fn changed_source_is_the_only_copy_and_keeps_its_mtime() {
    let root = project();
    plan(root.path()).run().expect("first run");

    let source = root.path().join("paper/fig1.png");
    write(&source, b"a larger png");

    let report = plan(root.path()).run().expect("second run");
    assert_eq!(report.changed, vec![PathBuf::from("public/paper/fig1.png")]);

    let dest = root.path().join("public/paper/fig1.png");
    assert_eq!(fs::read(&dest).expect("dest"), b"a larger png");
    let src_mtime = fs::metadata(&source).and_then(|m| m.modified()).expect("src");
    let dst_mtime = fs::metadata(&dest).and_then(|m| m.modified()).expect("dst");
    assert_eq!(src_mtime, dst_mtime);
}

#[test]
fn disallowed_extensions_are_never_copied() {
    let root = project();
    plan(root.path()).run().expect("run");
    assert!(!root.path().join("public/paper/notes.txt").exists());
}

#[test]
fn missing_document_fails_without_copying() {
    let root = project();
    fs::remove_file(root.path().join("simVLA.pdf")).expect("remove pdf");

    let err = plan(root.path()).run().expect_err("missing document");
    assert!(matches!(err, SyncError::MissingDocument(ref path) if path.ends_with("simVLA.pdf")));
    assert!(err.to_string().contains("Missing source asset"));
    assert!(!root.path().join("public/paper").exists());
}

#[test]
fn optional_document_only_warns() {
    let root = project();
    fs::remove_file(root.path().join("simVLA.pdf")).expect("remove pdf");

    let report = plan(root.path())
        .with_document_required(false)
        .run()
        .expect("lenient run");
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.changed.len(), 3);
}

#[test]
fn missing_asset_directory_is_a_warning() {
    let root = project();
    fs::remove_dir_all(root.path().join("paper")).expect("remove figures");

    let report = plan(root.path()).run().expect("run");
    assert_eq!(report.changed, vec![PathBuf::from("public/simVLA.pdf")]);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Asset directory not found"));
}
