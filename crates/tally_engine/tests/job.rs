use std::fs;
use std::path::Path;
use std::sync::Once;

use pretty_assertions::assert_eq;
use tally_core::{TokenCounter, TokenList};
use tally_engine::{CountError, CountJob, JobConfig, PersistError, REPORT_FILENAME};
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tally_logging::initialize_for_tests);
}

struct Dirs {
    _temp: TempDir,
    input: std::path::PathBuf,
    output: std::path::PathBuf,
}

fn dirs() -> Dirs {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input");
    let output = temp.path().join("output");
    fs::create_dir(&input).unwrap();
    fs::create_dir(&output).unwrap();
    Dirs {
        _temp: temp,
        input,
        output,
    }
}

fn job(input: &Path, output: &Path, tokens: &str) -> CountJob {
    CountJob::new(JobConfig {
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        tokens: TokenList::parse(tokens).unwrap(),
    })
}

fn report(output: &Path) -> String {
    fs::read_to_string(output.join(REPORT_FILENAME)).unwrap()
}

#[test]
fn counts_tokens_and_writes_report() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("pets.txt"), "cat dog cat").unwrap();

    let summary = job(&d.input, &d.output, "cat,dog").run().unwrap();

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.bytes_scanned, 11);
    assert_eq!(summary.output_path, d.output.join(REPORT_FILENAME));
    assert_eq!(report(&d.output), r#"{"cat": 2, "dog": 1}"#);
}

#[test]
fn sums_counts_over_nested_files() {
    init_logging();
    let d = dirs();
    fs::create_dir_all(d.input.join("part=1/day=2")).unwrap();
    fs::write(d.input.join("a.txt"), "cat\ncat").unwrap();
    fs::write(d.input.join("part=1/b.txt"), "dog").unwrap();
    fs::write(d.input.join("part=1/day=2/c.txt"), "cat dog\r\nbird").unwrap();

    let summary = job(&d.input, &d.output, "cat,dog,bird,fish").run().unwrap();

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(
        summary.counts.iter().collect::<Vec<_>>(),
        vec![("cat", 3), ("dog", 2), ("bird", 1), ("fish", 0)]
    );
    assert_eq!(
        report(&d.output),
        r#"{"cat": 3, "dog": 2, "bird": 1, "fish": 0}"#
    );
}

#[test]
fn tokens_do_not_match_across_file_boundaries() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("1.txt"), "ca").unwrap();
    fs::write(d.input.join("2.txt"), "t").unwrap();

    let summary = job(&d.input, &d.output, "cat").run().unwrap();
    assert_eq!(summary.counts.get("cat"), Some(0));
}

#[test]
fn line_break_inside_token_is_joined() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("split.txt"), "ca\nt").unwrap();

    let summary = job(&d.input, &d.output, "cat").run().unwrap();
    assert_eq!(summary.counts.get("cat"), Some(1));
}

#[test]
fn overlapping_matches_count_once() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("a.txt"), "aaa").unwrap();

    let summary = job(&d.input, &d.output, "aa").run().unwrap();
    assert_eq!(summary.counts.get("aa"), Some(1));
}

#[test]
fn empty_input_dir_reports_zeros() {
    init_logging();
    let d = dirs();

    let summary = job(&d.input, &d.output, "cat,dog").run().unwrap();
    assert_eq!(summary.files_scanned, 0);
    assert_eq!(report(&d.output), r#"{"cat": 0, "dog": 0}"#);
}

#[test]
fn duplicate_tokens_collapse_in_report() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("a.txt"), "cat cat").unwrap();

    job(&d.input, &d.output, "cat,dog,cat").run().unwrap();
    assert_eq!(report(&d.output), r#"{"cat": 2, "dog": 0}"#);
}

#[test]
fn repeated_runs_produce_identical_reports() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("a.txt"), "zeta alpha zeta").unwrap();
    fs::write(d.input.join("b.txt"), "alpha").unwrap();

    let job = job(&d.input, &d.output, "zeta,alpha");
    job.run().unwrap();
    let first = fs::read(d.output.join(REPORT_FILENAME)).unwrap();
    job.run().unwrap();
    let second = fs::read(d.output.join(REPORT_FILENAME)).unwrap();

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), r#"{"zeta": 2, "alpha": 2}"#);
}

#[test]
fn missing_input_dir_aborts_without_report() {
    init_logging();
    let d = dirs();
    let missing = d.input.join("absent");

    let err = job(&missing, &d.output, "cat").run().unwrap_err();
    assert!(matches!(err, CountError::InputDir { .. }));
    assert!(!d.output.join(REPORT_FILENAME).exists());
}

#[test]
fn missing_output_dir_fails_before_reading_inputs() {
    init_logging();
    let d = dirs();
    // Undecodable input would fail the run if it were read first.
    fs::write(d.input.join("bad.bin"), [0xFF, 0xFE, 0x00]).unwrap();
    let missing = d.output.join("absent");

    let err = job(&d.input, &missing, "cat").run().unwrap_err();
    assert!(matches!(
        err,
        CountError::Persist(PersistError::OutputDir { .. })
    ));
    assert!(!missing.exists());
}

#[test]
fn undecodable_file_aborts_whole_run() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("good.txt"), "cat").unwrap();
    fs::write(d.input.join("bad.bin"), [0x63, 0xFF]).unwrap();

    let err = job(&d.input, &d.output, "cat").run().unwrap_err();
    match err {
        CountError::Decode { path } => assert_eq!(path, d.input.join("bad.bin")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!d.output.join(REPORT_FILENAME).exists());
}

#[test]
fn failed_run_keeps_previous_report_intact() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("a.txt"), "cat").unwrap();
    job(&d.input, &d.output, "cat").run().unwrap();

    fs::write(d.input.join("bad.bin"), [0xFF]).unwrap();
    assert!(job(&d.input, &d.output, "cat").run().is_err());
    assert_eq!(report(&d.output), r#"{"cat": 1}"#);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_aborts_run_without_report() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("a.txt"), "cat").unwrap();
    std::os::unix::fs::symlink(d.input.join("missing.txt"), d.input.join("dangling.txt"))
        .unwrap();

    let err = job(&d.input, &d.output, "cat").run().unwrap_err();
    assert!(matches!(err, CountError::Read { .. }));
    assert!(!d.output.join(REPORT_FILENAME).exists());
}

#[test]
fn bytes_scanned_counts_file_bytes_including_bom() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("bom.txt"), b"\xEF\xBB\xBFcat\n").unwrap();

    let summary = job(&d.input, &d.output, "cat").run().unwrap();
    assert_eq!(summary.bytes_scanned, 7);
    assert_eq!(summary.counts.get("cat"), Some(1));
}

struct LengthCounter;
impl TokenCounter for LengthCounter {
    fn count(&self, text: &str, _token: &str) -> u64 {
        text.len() as u64
    }
}

#[test]
fn run_with_uses_custom_counter_on_stripped_text() {
    init_logging();
    let d = dirs();
    fs::write(d.input.join("a.txt"), "ab\ncd\n").unwrap();

    let summary = job(&d.input, &d.output, "x")
        .run_with(&LengthCounter)
        .unwrap();
    assert_eq!(summary.counts.get("x"), Some(4));
    assert_eq!(summary.bytes_scanned, 6);
}
