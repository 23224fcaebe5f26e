use assert_cmd::cargo;
use assert_fs::prelude::*;
use std::fs;
use std::process::Command;

fn bin() -> Command {
    Command::new(cargo::cargo_bin!("get_files"))
}

fn sample_source() -> assert_fs::TempDir {
    let src = assert_fs::TempDir::new().unwrap();
    src.child("root/keepme/a.txt").write_str("alpha").unwrap();
    src.child("root/dropme/b.txt").write_str("beta").unwrap();
    src
}

#[test]
fn flatten_scenario_prints_absolute_output() {
    let src = sample_source();
    let work = assert_fs::TempDir::new().unwrap();

    let out = bin()
        .current_dir(work.path())
        .arg(src.path().join("root"))
        .args(["-f", "keepme", "-o", "out"])
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let expected = dunce::canonicalize(work.path().join("out")).unwrap();
    assert_eq!(stdout.trim(), format!("Output generated: {}", expected.display()));

    let entries: Vec<_> = fs::read_dir(work.path().join("out"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("a.txt")]);
    assert_eq!(fs::read_to_string(work.path().join("out/a.txt")).unwrap(), "alpha");
}

#[test]
fn keep_scenario_mirrors_folder() {
    let src = sample_source();
    let work = assert_fs::TempDir::new().unwrap();

    let out = bin()
        .current_dir(work.path())
        .arg(src.path().join("root"))
        .args(["-f", "keepme", "-o", "out", "-k"])
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    assert!(work.path().join("out/keepme/a.txt").is_file());
    assert!(!work.path().join("out/dropme").exists());
}

#[test]
fn missing_folder_exits_one_and_lists_it() {
    let src = assert_fs::TempDir::new().unwrap();
    src.child("root/Y/y.txt").write_str("y").unwrap();
    let work = assert_fs::TempDir::new().unwrap();

    let out = bin()
        .current_dir(work.path())
        .arg(src.path().join("root"))
        .args(["-f", "X", "Y", "-o", "out"])
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Folder not found: X/"), "stdout: {stdout}");
    assert!(stdout.contains("Unable to find folders: X/"), "stdout: {stdout}");
    assert!(!stdout.contains("Y/"), "stdout: {stdout}");
    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[test]
fn empty_folder_is_a_successful_no_op() {
    let src = assert_fs::TempDir::new().unwrap();
    src.child("root/emptyfolder").create_dir_all().unwrap();
    let work = assert_fs::TempDir::new().unwrap();

    let out = bin()
        .current_dir(work.path())
        .arg(src.path().join("root"))
        .args(["-f", "emptyfolder", "-o", "out"])
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "No files found");
    assert!(!work.path().join("out").exists());
}

#[test]
fn ignored_file_is_reported_on_stdout() {
    let src = sample_source();
    src.child("root/keepme/Skip.ME").write_str("x").unwrap();
    let work = assert_fs::TempDir::new().unwrap();

    let out = bin()
        .current_dir(work.path())
        .arg(src.path().join("root"))
        .args(["-f", "keepme", "-o", "out", "-i", "skip.me"])
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let first = stdout.lines().next().unwrap_or_default();
    assert!(first.starts_with("Skipping file: "), "stdout: {stdout}");
    assert!(first.ends_with("Skip.ME"), "stdout: {stdout}");
    assert!(!work.path().join("out/Skip.ME").exists());
    assert!(work.path().join("out/a.txt").exists());
}

#[test]
fn missing_source_fails() {
    let work = assert_fs::TempDir::new().unwrap();
    let out = bin()
        .current_dir(work.path())
        .arg(work.path().join("nope"))
        .args(["-f", "x", "-o", "out"])
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Source path not found"), "stderr: {stderr}");
}

#[test]
fn json_logs_go_to_stderr_only() {
    let src = sample_source();
    let work = assert_fs::TempDir::new().unwrap();

    let out = bin()
        .current_dir(work.path())
        .arg(src.path().join("root"))
        .args(["-f", "keepme", "-o", "out", "--json", "--log-level", "debug"])
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.lines().any(|l| l.trim_start().starts_with('{')), "stderr: {stderr}");
}

#[test]
fn log_file_receives_plain_log_lines() {
    let src = sample_source();
    let work = assert_fs::TempDir::new().unwrap();
    let logs = assert_fs::TempDir::new().unwrap();
    let log_path = logs.path().join("run.log");

    let out = bin()
        .current_dir(work.path())
        .arg(src.path().join("root"))
        .args(["-f", "keepme", "-o", "out", "--log-level", "info", "--log-file"])
        .arg(&log_path)
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let written = fs::read_to_string(&log_path).unwrap();
    assert!(written.contains("output published"), "log file: {written}");
    assert!(!written.contains('\u{1b}'), "log file should carry no ANSI codes: {written}");
}

#[cfg(unix)]
#[test]
fn symlinked_folder_is_followed_end_to_end() {
    let src = sample_source();
    src.child("root/shared/lib.txt").write_str("lib").unwrap();
    std::os::unix::fs::symlink(
        src.path().join("root/shared"),
        src.path().join("root/keepme/linked"),
    )
    .unwrap();
    let work = assert_fs::TempDir::new().unwrap();

    let out = bin()
        .current_dir(work.path())
        .arg(src.path().join("root"))
        .args(["-f", "keepme", "-o", "out"])
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(work.path().join("out/lib.txt")).unwrap(), "lib");
    assert_eq!(fs::read_to_string(work.path().join("out/a.txt")).unwrap(), "alpha");
}
