use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

/// A destination name longer than the filesystem allows fails both the
/// rename and the fallback copy. The binary still exits 0, reports the
/// failure on the console, records it in the run log, and processes the
/// remaining entries.
#[test]
fn failed_entry_is_reported_and_run_exits_zero() {
    let td = tempdir().unwrap();
    let src = td.path().join("in");
    let dst = td.path().join("out");
    fs::create_dir_all(&src).unwrap();

    fs::write(src.join("bad.png"), b"stuck payload").unwrap();
    fs::write(src.join("good.png"), b"fine payload").unwrap();

    // 300-char stem, past the usual 255-byte filename limit
    let too_long = format!("{}.png", "x".repeat(300));
    let xml = format!(
        "<config>\n  <source_dir>{}</source_dir>\n  <dest_dir>{}</dest_dir>\n  <log_level>quiet</log_level>\n  <rename><from>bad.png</from><to>{}</to></rename>\n  <rename><from>good.png</from><to>kept.png</to></rename>\n</config>\n",
        src.display(),
        dst.display(),
        too_long
    );
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, xml).unwrap();

    let assert = Command::cargo_bin("cert_move")
        .unwrap()
        .env("CERT_MOVE_CONFIG", &cfg_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Failed moves:"), "stdout: {stdout}");
    assert!(stdout.contains("bad.png"), "stdout: {stdout}");
    assert!(stdout.contains("- good.png -> kept.png"), "stdout: {stdout}");

    // the failing entry's source is untouched, the later entry still moved
    assert_eq!(fs::read(src.join("bad.png")).unwrap(), b"stuck payload");
    assert_eq!(fs::read(dst.join("kept.png")).unwrap(), b"fine payload");

    let log: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dst.join("rename_log.json")).unwrap()).unwrap();
    assert_eq!(log["failed"][0]["name"], "bad.png");
    assert!(
        !log["failed"][0]["error"].as_str().unwrap().is_empty(),
        "log: {log}"
    );
    assert_eq!(log["renamed"][0]["from"], "good.png");
}
