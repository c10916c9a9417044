use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

fn write_config(path: &std::path::Path, src: &std::path::Path, dst: &std::path::Path) {
    let xml = format!(
        "<config>\n  <source_dir>{}</source_dir>\n  <dest_dir>{}</dest_dir>\n  <log_level>quiet</log_level>\n  <rename><from>one.jpg</from><to>first.png</to></rename>\n  <rename><from>two.png</from><to>second.png</to></rename>\n  <rename><from>ghost.png</from><to>never.png</to></rename>\n</config>\n",
        src.display(),
        dst.display()
    );
    fs::write(path, xml).unwrap();
}

/// Full binary run driven by an XML config: files move, the console report
/// lists renames and missing names, and the JSON run log matches.
#[test]
fn binary_moves_reports_and_logs() {
    let td = tempdir().unwrap();
    let src = td.path().join("in");
    let dst = td.path().join("out");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("one.jpg"), b"one").unwrap();
    fs::write(src.join("two.png"), b"two").unwrap();

    let cfg_path = td.path().join("config.xml");
    write_config(&cfg_path, &src, &dst);

    let assert = Command::cargo_bin("cert_move")
        .unwrap()
        .env("CERT_MOVE_CONFIG", &cfg_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Renamed/moved files:"), "stdout: {stdout}");
    assert!(stdout.contains("- one.jpg -> first.png"), "stdout: {stdout}");
    assert!(stdout.contains("- two.png -> second.png"), "stdout: {stdout}");
    assert!(
        stdout.contains("Missing files (not found in source folder):"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("- ghost.png"), "stdout: {stdout}");

    // extension forced onto the .jpg source
    assert_eq!(fs::read(dst.join("first.png")).unwrap(), b"one");
    assert_eq!(fs::read(dst.join("second.png")).unwrap(), b"two");
    assert!(!src.join("one.jpg").exists());
    assert!(!src.join("two.png").exists());

    let log: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dst.join("rename_log.json")).unwrap()).unwrap();
    assert_eq!(log["src_dir"], src.display().to_string());
    assert_eq!(log["dst_dir"], dst.display().to_string());
    assert_eq!(log["renamed"].as_array().unwrap().len(), 2);
    assert_eq!(log["missing"][0], "ghost.png");
    assert!(log["timestamp"].as_str().unwrap().contains('T'));
}

/// CLI directory flags override the config file values.
#[test]
fn cli_flags_override_config() {
    let td = tempdir().unwrap();
    let cfg_src = td.path().join("cfg-in");
    let cfg_dst = td.path().join("cfg-out");
    fs::create_dir_all(&cfg_src).unwrap();

    let flag_src = td.path().join("flag-in");
    let flag_dst = td.path().join("flag-out");
    fs::create_dir_all(&flag_src).unwrap();
    fs::write(flag_src.join("one.jpg"), b"payload").unwrap();

    let cfg_path = td.path().join("config.xml");
    write_config(&cfg_path, &cfg_src, &cfg_dst);

    Command::cargo_bin("cert_move")
        .unwrap()
        .env("CERT_MOVE_CONFIG", &cfg_path)
        .arg("--source-dir")
        .arg(&flag_src)
        .arg("--dest-dir")
        .arg(&flag_dst)
        .assert()
        .success();

    assert!(flag_dst.join("first.png").exists());
    assert!(!cfg_dst.exists(), "config-file dest must not be used");
}

/// Dry-run prints intentions but touches nothing: no moves, no run log.
#[test]
fn dry_run_mutates_nothing() {
    let td = tempdir().unwrap();
    let src = td.path().join("in");
    let dst = td.path().join("out");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("one.jpg"), b"one").unwrap();

    let cfg_path = td.path().join("config.xml");
    write_config(&cfg_path, &src, &dst);

    Command::cargo_bin("cert_move")
        .unwrap()
        .env("CERT_MOVE_CONFIG", &cfg_path)
        .arg("--dry-run")
        .assert()
        .success();

    assert!(src.join("one.jpg").exists(), "source must be untouched");
    assert!(!dst.exists(), "destination must not be created in dry-run");
}
