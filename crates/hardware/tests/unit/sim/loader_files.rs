//! Program loading from real files.

use std::io::Write;

use tempfile::NamedTempFile;

use xsim_core::common::SetupError;
use xsim_core::sim::loader::load_program;

fn write_program(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write program");
    file
}

#[test]
fn test_load_simple_program() {
    let file = write_program("0000\n8f2a\n7000\n");
    let program = load_program(file.path()).unwrap();
    assert_eq!(program, vec![0x0000, 0x8F2A, 0x7000]);
}

#[test]
fn test_load_with_comments_and_blanks() {
    let file = write_program("# init r1\n8105\n\n# then halt\n0x7000\n");
    let program = load_program(file.path()).unwrap();
    assert_eq!(program, vec![0x8105, 0x7000]);
}

#[test]
fn test_load_reports_bad_line() {
    let file = write_program("0000\nxyzw\n");
    let err = load_program(file.path()).unwrap_err();
    match err {
        SetupError::ProgramParse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_rejects_comment_only_file() {
    let file = write_program("# nothing here\n");
    let err = load_program(file.path()).unwrap_err();
    assert!(matches!(err, SetupError::EmptyProgram));
}

#[test]
fn test_load_missing_file_names_path() {
    let err = load_program(std::path::Path::new("/no/such/program.hex")).unwrap_err();
    assert!(err.to_string().contains("/no/such/program.hex"));
}
