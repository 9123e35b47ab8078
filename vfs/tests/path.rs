use vfs::path::{Path, resolve, validate};
use vfs::{Error, MAX_PATH_LEN};

#[test]
fn canonicalize() {
    assert_eq!(Some("/a/b".to_owned()), "b".canonicalize("/a"));
    assert_eq!(Some("/b".to_owned()), "../b".canonicalize("/a"));
    assert_eq!(Some("/a/c".to_owned()), "/a/./b/../c".canonicalize("/x"));
    assert_eq!(Some("/".to_owned()), ".".canonicalize("/"));
    assert_eq!(Some("/".to_owned()), "/".canonicalize("/a"));
    assert_eq!(None, "..".canonicalize("/"));
    assert_eq!(None, "a//b".canonicalize("/"));
    assert_eq!(None, "a/".canonicalize("/"));
}

#[test]
fn parent_file() {
    assert_eq!(Some(("/", "a")), "/a".parent_file());
    assert_eq!(Some(("/a/b", "c")), "/a/b/c".parent_file());
    assert_eq!(None, "/".parent_file());
    assert_eq!(Some("c"), "/a/b/c".file_name());
}

#[test]
fn rejects_malformed_paths() {
    assert_eq!(Err(Error::InvalidPath), validate(""));
    assert_eq!(Err(Error::InvalidPath), validate("a\0b"));

    let longest = "x".repeat(MAX_PATH_LEN);
    assert_eq!(Ok(longest.as_str()), validate(&longest));
    assert_eq!(Err(Error::NameTooLong), validate(&"x".repeat(MAX_PATH_LEN + 1)));
}

#[test]
fn resolve_relative_to_cwd() {
    assert_eq!(Ok("/test_rm.txt".to_owned()), resolve("test_rm.txt", "/"));
    assert_eq!(Err(Error::InvalidPath), resolve("../escape", "/"));
    assert_eq!(Err(Error::InvalidPath), resolve("", "/"));
}
