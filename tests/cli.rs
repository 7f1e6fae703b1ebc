use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

/// Temporary working directory, removed when the test finishes.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("bf2c-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        ScratchDir(dir)
    }

    fn path(&self) -> &Path {
        &self.0
    }

    fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.0.join(name), contents).unwrap();
    }

    fn bf2c(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_bf2c"))
            .current_dir(&self.0)
            .args(args)
            .output()
            .unwrap()
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[test]
fn writes_to_output_c_by_default() {
    let dir = ScratchDir::new("default-output");
    dir.write("in.bf", "+.");

    let output = dir.bf2c(&["-f", "in.bf"]);
    assert!(output.status.success());

    let code = std::fs::read_to_string(dir.path().join("output.c")).unwrap();
    assert!(code.contains("\n\tcells[currentCell] += 1;\n\tprintf(\"%c\", cells[currentCell]);"));
}

#[test]
fn reports_skipped_commands_on_stderr() {
    let dir = ScratchDir::new("warnings");
    dir.write("in.bf", "+?\u{7}");

    let output = dir.bf2c(&["-f", "in.bf", "-o", "out.c"]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("WARNING: Invalid command `?` at 1:2, skipping..."));
    assert!(stderr.contains("WARNING: Invalid command `\\u{7}` at 1:3, skipping..."));
    assert!(dir.path().join("out.c").exists());
}

#[test]
fn missing_input_shows_usage() {
    let dir = ScratchDir::new("usage");
    let output = dir.bf2c(&[]);
    assert_eq!(output.status.code(), Some(64));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Usage"));
}

#[test]
fn help_is_not_an_error() {
    let dir = ScratchDir::new("help");
    let output = dir.bf2c(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("--output"));
}

#[test]
fn read_write_and_usage_failures_exit_differently() {
    let dir = ScratchDir::new("failures");
    let read = dir.bf2c(&["-f", "does-not-exist.bf"]);
    assert_eq!(read.status.code(), Some(1));
    assert!(String::from_utf8(read.stderr)
        .unwrap()
        .contains("could not read file `does-not-exist.bf`"));

    dir.write("in.bf", "+");
    let write = dir.bf2c(&["-f", "in.bf", "-o", "missing-dir/out.c"]);
    assert_eq!(write.status.code(), Some(2));

    let usage = dir.bf2c(&["-f", "in.bf", "--no-such-flag"]);
    assert_eq!(usage.status.code(), Some(64));
}

#[test]
fn strict_mode_rejects_unmatched_brackets() {
    let dir = ScratchDir::new("strict");
    dir.write("in.bf", "+]");

    let lenient = dir.bf2c(&["-f", "in.bf", "-o", "lenient.c"]);
    assert!(lenient.status.success());
    assert!(dir.path().join("lenient.c").exists());

    let strict = dir.bf2c(&["-f", "in.bf", "-o", "strict.c", "--strict"]);
    assert_eq!(strict.status.code(), Some(3));
    assert!(!dir.path().join("strict.c").exists());
}
