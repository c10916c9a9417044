use std::fs;

use assert_fs::prelude::*;
use cert_move::fs_ops::{move_file, unique_destination};

/// Happy path: create a file, move it, verify src removed and dst matches.
#[test]
fn move_file_happy_path() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("source.png");
    src.write_binary(b"image payload").unwrap();
    let dest_dir = temp.child("certs");
    dest_dir.create_dir_all().unwrap();
    let dest = dest_dir.path().join("renamed.png");

    move_file(src.path(), &dest).expect("move_file should succeed");

    assert!(!src.path().exists(), "source should be removed");
    assert_eq!(fs::read(&dest).unwrap(), b"image payload");
}

/// Resolver + move together: a taken destination yields `_2` and the move
/// leaves the original file untouched.
#[test]
fn move_to_resolved_path_leaves_existing_alone() {
    let temp = assert_fs::TempDir::new().unwrap();
    let existing = temp.child("cert.png");
    existing.write_binary(b"already here").unwrap();
    let src = temp.child("incoming.png");
    src.write_binary(b"new arrival").unwrap();

    let dest = unique_destination(&temp.path().join("cert.png"));
    assert_eq!(dest, temp.path().join("cert_2.png"));

    move_file(src.path(), &dest).unwrap();

    assert_eq!(fs::read(existing.path()).unwrap(), b"already here");
    assert_eq!(fs::read(&dest).unwrap(), b"new arrival");
}
