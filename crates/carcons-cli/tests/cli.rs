use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::{TempDir, tempdir};

const ALIGNMENT: &str = ">query\nACDE\n>o1\nACDE\n>o2\nACDF\n>o3\nACWF\n";

fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "").unwrap();
    fs::write(dir.path().join("aln.fasta"), ALIGNMENT).unwrap();
    dir
}

fn carcons(dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_carcons"))
        .arg("-c")
        .arg(dir.join("config.toml"))
        .args(args)
        .env("CARCONS_DATA", dir.join("data"))
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut pipe = child.stdin.take().unwrap();
    if let Some(text) = stdin {
        pipe.write_all(text.as_bytes()).unwrap();
    }
    drop(pipe);
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn default_invocation_prints_one_score_line() {
    let dir = workspace();
    let output = carcons(dir.path(), &["4", "F", "aln.fasta"], None);

    assert!(output.status.success(), "{}", stderr(&output));
    let printed = stdout(&output);
    assert_eq!(printed.lines().count(), 1);
    assert!(printed.ends_with('\n'));
    assert!(printed.trim_end().parse::<f64>().is_ok(), "{:?}", printed);
}

#[test]
fn alignment_is_read_from_standard_input() {
    let dir = workspace();
    let from_file = carcons(dir.path(), &["4", "F", "aln.fasta"], None);
    let from_stdin = carcons(dir.path(), &["4", "F"], Some(ALIGNMENT));
    let from_dash = carcons(dir.path(), &["4", "F", "-"], Some(ALIGNMENT));

    assert!(from_stdin.status.success(), "{}", stderr(&from_stdin));
    assert_eq!(stdout(&from_stdin), stdout(&from_file));
    assert_eq!(stdout(&from_dash), stdout(&from_file));
}

#[test]
fn verbose_logging_stays_off_standard_output() {
    let dir = workspace();
    let quiet = carcons(dir.path(), &["4", "F", "aln.fasta"], None);
    let verbose = carcons(dir.path(), &["-vvv", "4", "F", "aln.fasta"], None);

    assert_eq!(stdout(&verbose), stdout(&quiet));
    assert!(stderr(&verbose).contains("CAR score computed."));
}

#[test]
fn score_is_written_to_output_file_when_given() {
    let dir = workspace();
    let output = carcons(dir.path(), &["4", "F", "aln.fasta", "score.txt"], None);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(output.stdout.is_empty());
    let written = fs::read_to_string(dir.path().join("score.txt")).unwrap();
    assert_eq!(written.lines().count(), 1);
}

#[test]
fn bad_arguments_exit_with_one_and_print_usage() {
    let dir = workspace();
    let output = carcons(dir.path(), &["4"], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Usage:"));
}

#[test]
fn scoring_errors_exit_with_one_without_output() {
    let dir = workspace();
    let output = carcons(dir.path(), &["9", "F", "aln.fasta", "score.txt"], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("carcons: error:"));
    assert!(!dir.path().join("score.txt").exists());
}

#[test]
fn missing_alignment_file_exits_with_one() {
    let dir = workspace();
    let output = carcons(dir.path(), &["4", "F", "missing.fasta"], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn help_exits_with_zero() {
    let dir = workspace();
    let output = carcons(dir.path(), &["--help"], None);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("POSITION"));
}
