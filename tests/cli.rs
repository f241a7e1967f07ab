use std::{fs, path::Path, process::Output};

use assert_cmd::Command;
use tempfile::TempDir;

fn catpack(subcommand: &str, paths: &[&Path]) -> Output {
    Command::cargo_bin("catpack")
        .unwrap()
        .arg(subcommand)
        .args(paths)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn pack_then_unpack() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("A.swift"), "a").unwrap();
    fs::write(src.join("b.json"), "{}").unwrap();
    let archive = tmp.path().join("bundle.txt");
    let out = tmp.path().join("out");

    let output = catpack("pack", &[&src, &archive]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("Successfully packed 2 files into"));

    let output = catpack("unpack", &[&archive, &out]);
    assert_eq!(output.status.code(), Some(0));
    let report = stdout(&output);
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines[0], format!("Created {}", out.join("A.swift").display()));
    assert_eq!(lines[1], format!("Created {}", out.join("b.json").display()));
    assert!(lines[3].starts_with("Successfully unpacked 2 files into"));
    assert_eq!(fs::read_to_string(out.join("A.swift")).unwrap(), "a");

    let output = catpack("list", &[&archive]);
    assert_eq!(output.status.code(), Some(0));
    let listing = stdout(&output);
    assert_eq!(listing.lines().count(), 2);
    assert!(listing.lines().next().unwrap().starts_with("A.swift"));
}

#[test]
fn empty_inputs_are_not_failures() {
    let tmp = TempDir::new().unwrap();
    let archive = tmp.path().join("bundle.txt");

    let output = catpack("pack", &[tmp.path(), &archive]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output).trim_end(),
        format!(
            "No .swift, .plist, .json, or .entitlements files found in {}",
            tmp.path().display()
        )
    );

    fs::write(&archive, "plain text").unwrap();
    let out = tmp.path().join("out");
    let output = catpack("unpack", &[&archive, &out]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("No file markers found"));
}

#[test]
fn exit_codes() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");
    let out = tmp.path().join("out");

    let output = catpack("pack", &[&missing, &out]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("source directory not found"));

    let output = catpack("unpack", &[&missing, &out]);
    assert_eq!(output.status.code(), Some(1));

    let archive = tmp.path().join("bundle.txt");
    fs::write(&archive, "// FILE: ../x.json\n{}").unwrap();
    let output = catpack("unpack", &[&archive, &out]);
    assert_eq!(output.status.code(), Some(1));

    let output = Command::cargo_bin("catpack")
        .unwrap()
        .args(["unpack", "--trust-names"])
        .arg(&archive)
        .arg(&out)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(tmp.path().join("x.json").exists());

    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("bin.json"), [0xff, 0xfe]).unwrap();
    let output = catpack("pack", &[&src, &out]);
    assert_eq!(output.status.code(), Some(2));
}
