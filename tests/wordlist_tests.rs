use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use dirhunter::error::ConfigError;
use dirhunter::wordlist;

#[test]
fn trims_and_drops_blank_lines() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "admin\n  login \n\n\t\nbackup\n").unwrap();

    let words = wordlist::load(file.path()).unwrap();
    assert_eq!(words, vec!["admin", "login", "backup"]);
}

#[test]
fn keeps_file_order() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "zeta\nalpha\nmiddle\n").unwrap();

    let words = wordlist::load(file.path()).unwrap();
    assert_eq!(words, vec!["zeta", "alpha", "middle"]);
}

#[test]
fn empty_file_yields_no_candidates() {
    let file = NamedTempFile::new().unwrap();
    assert!(wordlist::load(file.path()).unwrap().is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let err = wordlist::load(Path::new("/definitely/not/here.txt")).unwrap_err();
    assert!(err.to_string().contains("wordlist"));
}

#[test]
fn read_error_mid_file_is_fatal_not_partial() {
    // valid first line, then bytes that fail UTF-8 decoding mid-read
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"admin\n\xff\xfe\xfa\nbackup\n").unwrap();

    let err = wordlist::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Wordlist { .. }));
}
