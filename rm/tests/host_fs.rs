use std::fs;

use rm::{Exit, HostFs, Remover};
use tempfile::TempDir;
use vfs::{Error, FileSystem, MAX_OPEN_FILES};

fn remove(fs: &HostFs, create_first: bool, path: &str) -> (Exit, String) {
    let mut out = Vec::new();
    let exit = Remover::new(fs)
        .create_first(create_first)
        .run(&[path], &mut out);
    (exit, String::from_utf8(out).unwrap())
}

#[test]
fn create_then_remove() {
    let root = TempDir::new().unwrap();
    let fs = HostFs::new(root.path());

    let (exit, out) = remove(&fs, true, "test_rm.txt");

    assert_eq!(Exit::Success, exit);
    assert_eq!("remove successful: test_rm.txt\n", out);
    assert!(!root.path().join("test_rm.txt").exists());
}

#[test]
fn remove_existing_file() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("notes.txt"), "keep me?").unwrap();
    let fs = HostFs::new(root.path());

    assert!(fs.exists("notes.txt"));
    assert_eq!(Exit::Success, remove(&fs, false, "notes.txt").0);
    assert!(!fs.exists("notes.txt"));
    assert_eq!(Exit::Failure, remove(&fs, false, "notes.txt").0);
}

#[test]
fn missing_file() {
    let root = TempDir::new().unwrap();
    let fs = HostFs::new(root.path());

    let (exit, out) = remove(&fs, false, "missing.txt");

    assert_eq!(Exit::Failure, exit);
    assert!(out.contains("missing.txt"), "{out}");
    assert_eq!(Err(Error::NotFound), fs.remove("missing.txt"));
}

#[test]
fn directories_are_refused() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("dir")).unwrap();
    let fs = HostFs::new(root.path());

    let err = fs.remove("dir").unwrap_err();
    // Linux 报 EISDIR，macOS 报 EPERM
    assert!(
        matches!(err, Error::IsADirectory | Error::PermissionDenied),
        "{err:?}"
    );
    assert!(root.path().join("dir").is_dir());
}

#[test]
fn missing_parent() {
    let root = TempDir::new().unwrap();
    let fs = HostFs::new(root.path());

    assert_eq!(Err(Error::NotFound), fs.create("absent/file").map(|_| ()));
    assert_eq!(Err(Error::InvalidPath), fs.remove(""));
}

#[test]
fn handles() {
    let root = TempDir::new().unwrap();
    let fs = HostFs::new(root.path());

    let handles: Vec<_> = (0..MAX_OPEN_FILES)
        .map(|i| fs.create(&format!("f{i}")).unwrap())
        .collect();
    assert_eq!(Err(Error::TooManyOpenFiles), fs.create("overflow").map(|_| ()));
    assert!(!fs.exists("overflow"));

    fs.remove("f0").unwrap();
    assert_eq!(Err(Error::BadHandle), fs.close(handles[0]));
    for &handle in &handles[1..] {
        fs.close(handle).unwrap();
    }
}

#[test]
fn aliases_share_handles() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("sub")).unwrap();
    let fs = HostFs::new(root.path());

    let aliased = fs.create("sub/../busy").unwrap();
    let dotted = fs.create("./busy").unwrap();
    assert!(root.path().join("busy").is_file());

    fs.remove("busy").unwrap();
    assert_eq!(Err(Error::BadHandle), fs.close(aliased));
    assert_eq!(Err(Error::BadHandle), fs.close(dotted));
}

#[test]
fn relative_paths_stay_under_root() {
    let root = TempDir::new().unwrap();
    let fs = HostFs::new(root.path().join("inner"));

    assert_eq!(Err(Error::InvalidPath), fs.remove("../escape"));
    assert_eq!(Err(Error::InvalidPath), fs.create("../escape").map(|_| ()));
}
