use std::{fs, path::PathBuf};

use tempfile::TempDir;
use weather_card_core::{
    DocumentError,
    document::{END_SENTINEL, START_SENTINEL, preview, update},
};

fn write_doc(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("README.md");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn update_twice_reports_changed_then_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, &format!("# Hi\n{START_SENTINEL}\nstale\n{END_SENTINEL}\n"));

    assert!(update(&path, "fresh card").unwrap());
    let after_first = fs::read_to_string(&path).unwrap();

    assert!(!update(&path, "fresh card").unwrap());
    let after_second = fs::read_to_string(&path).unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(
        after_first,
        format!("# Hi\n{START_SENTINEL}\nfresh card\n{END_SENTINEL}\n")
    );
}

#[test]
fn content_outside_region_is_untouched() {
    let dir = TempDir::new().unwrap();
    let before = "# Profile\n\n![badge](https://example.com/b.svg)\n\n";
    let after = "\n\n## Projects\n- one\n- two\n";
    let path = write_doc(
        &dir,
        &format!("{before}{START_SENTINEL}\nold\n{END_SENTINEL}{after}"),
    );

    update(&path, "line 1\nline 2").unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.starts_with(&format!("{before}{START_SENTINEL}\n")));
    assert!(text.ends_with(&format!("\n{END_SENTINEL}{after}")));
}

#[test]
fn missing_start_sentinel_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let original = format!("no card here\n{END_SENTINEL}\n");
    let path = write_doc(&dir, &original);

    assert!(!update(&path, "card").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn crlf_document_is_written_with_lf() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        &format!("top\r\n{START_SENTINEL}\r\nold\r\n{END_SENTINEL}\r\nbottom\r\n"),
    );

    assert!(update(&path, "new").unwrap());

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains('\r'));
    assert_eq!(text, format!("top\n{START_SENTINEL}\nnew\n{END_SENTINEL}\nbottom\n"));
}

#[test]
fn crlf_only_difference_is_not_a_change() {
    let dir = TempDir::new().unwrap();
    let original = format!("{START_SENTINEL}\r\ncard\r\n{END_SENTINEL}\r\n");
    let path = write_doc(&dir, &original);

    assert!(!update(&path, "card").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn preview_never_writes() {
    let dir = TempDir::new().unwrap();
    let original = format!("{START_SENTINEL}\nold\n{END_SENTINEL}");
    let path = write_doc(&dir, &original);

    assert!(preview(&path, "new").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
    assert!(!preview(&path, "old").unwrap());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.md");

    let err = update(&path, "card").unwrap_err();

    assert!(matches!(&err, DocumentError::Read { path: p, .. } if *p == path));
    assert!(err.to_string().contains("absent.md"));
}
