// mezzpress-core/tests/discovery_tests.rs

use mezzpress_core::discovery::{find_convertible_files, MediaFile, SourceCategory};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn names(files: &[MediaFile]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.path().file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_find_convertible_files_filters_by_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    File::create(root.join("clip1.braw"))?;
    File::create(root.join("clip2.MOV"))?; // Case insensitivity
    File::create(root.join("clip3.Braw"))?;
    File::create(root.join("notes.txt"))?;
    File::create(root.join("already.mp4"))?;
    File::create(root.join("image.jpg"))?;

    let files = find_convertible_files(root);

    assert_eq!(
        names(&files),
        vec!["clip1.braw", "clip2.MOV", "clip3.Braw"] // Original case preserved
    );
    Ok(())
}

#[test]
fn test_find_convertible_files_recurses_depth_first() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    File::create(root.join("a.braw"))?;
    fs::create_dir(root.join("day2"))?;
    File::create(root.join("day2").join("c.mov"))?;
    File::create(root.join("day2").join("b.braw"))?;
    fs::create_dir_all(root.join("day2").join("bcam"))?;
    File::create(root.join("day2").join("bcam").join("deep.mov"))?;
    File::create(root.join("z.mov"))?;

    let files = find_convertible_files(root);

    // Entries are visited in name order per directory, descending into a
    // subdirectory at the point it is encountered.
    assert_eq!(
        names(&files),
        vec!["a.braw", "b.braw", "deep.mov", "c.mov", "z.mov"]
    );
    Ok(())
}

#[test]
fn test_find_convertible_files_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    for name in ["x.mov", "m.braw", "a.mov", "q.braw"] {
        File::create(root.join(name))?;
    }
    fs::create_dir(root.join("nested"))?;
    File::create(root.join("nested").join("n.mov"))?;

    let first = find_convertible_files(root);
    let second = find_convertible_files(root);

    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
    Ok(())
}

#[test]
fn test_find_convertible_files_empty_root() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let files = find_convertible_files(dir.path());
    assert!(files.is_empty());

    // A root with only ineligible files is just as empty.
    File::create(dir.path().join("readme.md"))?;
    assert!(find_convertible_files(dir.path()).is_empty());
    Ok(())
}

#[test]
fn test_find_convertible_files_missing_root_yields_empty() {
    // Root validation happens at the command surface; the scanner itself
    // degrades to a warning and an empty result.
    let missing = PathBuf::from("surely_this_does_not_exist_42_discovery");
    assert!(find_convertible_files(&missing).is_empty());
}

#[test]
fn test_media_file_categories() {
    let raw = MediaFile::from_path(PathBuf::from("/footage/a.BRAW"));
    assert_eq!(raw.category(), SourceCategory::Raw);
    assert_eq!(raw.path(), Path::new("/footage/a.BRAW"));

    let container = MediaFile::from_path(PathBuf::from("/footage/b.mov"));
    assert_eq!(container.category(), SourceCategory::Container);

    let other = MediaFile::from_path(PathBuf::from("/footage/c.mkv"));
    assert_eq!(other.category(), SourceCategory::Unsupported);

    let no_ext = MediaFile::from_path(PathBuf::from("/footage/noext"));
    assert_eq!(no_ext.category(), SourceCategory::Unsupported);
}
