//! Tests for line reading, filtering and tokenization

use super::*;
use crate::Error;
use crate::app::services::row_reader::RowReader;
use crate::config::ReaderConfig;

fn reader() -> RowReader {
    RowReader::new(ReaderConfig::default())
}

#[test]
fn test_skips_blank_and_comment_lines() {
    let entries = reader().read_str(&create_mixed_flight_csv()).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[0].raw,
        "FL1,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100"
    );
    assert_eq!(entries[1].raw, "AB,JFK,LHR,2024-03-01 08:30,2024-03-01 14:45,0");
    assert!(entries.iter().all(|entry| !entry.raw.starts_with('#')));
}

#[test]
fn test_line_numbers_count_skipped_lines() {
    let entries = reader().read_str(&create_mixed_flight_csv()).unwrap();

    let line_numbers: Vec<usize> = entries.iter().map(|entry| entry.line_number).collect();
    assert_eq!(line_numbers, vec![2, 5, 7]);
}

#[test]
fn test_raw_text_is_trimmed_but_fields_are_not() {
    let entries = reader().read_str(&create_mixed_flight_csv()).unwrap();
    let last = &entries[2];

    assert_eq!(
        last.raw,
        "XY9 , CDG , AMS ,2024-05-05 06:00,2024-05-05 07:15, 89.5"
    );
    assert_eq!(last.fields[0], "XY9 ");
    assert_eq!(last.fields[1], " CDG ");
    assert_eq!(last.fields[5], " 89.5");
}

#[test]
fn test_quoted_field_keeps_embedded_delimiter() {
    let entries = reader()
        .read_str(r#"FL1,"NYC,JFK",LAX,2024-01-01 09:00,2024-01-01 10:00,100"#)
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].field_count(), 6);
    assert_eq!(entries[0].fields[1], "NYC,JFK");
}

#[test]
fn test_short_and_long_rows_are_kept() {
    let content = "FL1,NYC\nFL2,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100,extra\nFL3,,\n";
    let entries = reader().read_str(content).unwrap();

    let counts: Vec<usize> = entries.iter().map(|entry| entry.field_count()).collect();
    assert_eq!(counts, vec![2, 7, 3]);
}

#[test]
fn test_windows_line_endings() {
    let content = "# comment\r\nFL1,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100\r\n\r\n";
    let entries = reader().read_str(content).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].fields[5], "100");
}

#[test]
fn test_carriage_return_only_line_endings() {
    let content = "FL1,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100\r\
                   FL2,NYC,LAX,2024-01-01 11:00,2024-01-01 12:00,200\r\
                   bad row\r";
    let entries = reader().read_str(content).unwrap();

    let raws: Vec<&str> = entries.iter().map(|entry| entry.raw.as_str()).collect();
    assert_eq!(
        raws,
        vec![
            "FL1,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100",
            "FL2,NYC,LAX,2024-01-01 11:00,2024-01-01 12:00,200",
            "bad row",
        ]
    );
    let line_numbers: Vec<usize> = entries.iter().map(|entry| entry.line_number).collect();
    assert_eq!(line_numbers, vec![1, 2, 3]);
}

#[test]
fn test_embedded_carriage_return_starts_a_new_line() {
    let entries = reader().read_str("x,y\rz\n").unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].raw, "x,y");
    assert_eq!(entries[0].fields, vec!["x".to_string(), "y".to_string()]);
    assert_eq!(entries[1].raw, "z");
    assert_eq!(entries[1].fields, vec!["z".to_string()]);
}

#[test]
fn test_only_comments_and_blanks_yields_nothing() {
    let entries = reader().read_str("# one\n\n   \n#two\n").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_read_file_matches_read_str() {
    let content = create_mixed_flight_csv();
    let temp_file = create_temp_file(&content);

    let from_file = reader().read_file(temp_file.path()).unwrap();
    let from_str = reader().read_str(&content).unwrap();

    assert_eq!(from_file, from_str);
}

#[test]
fn test_read_missing_file_is_io_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let result = reader().read_file(&temp_dir.path().join("missing.csv"));

    match result.unwrap_err() {
        Error::Io { message, .. } => assert!(message.contains("missing.csv")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_read_invalid_utf8_is_io_error() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), [0x46, 0x4c, 0xff, 0xfe, 0x0a]).unwrap();

    assert!(matches!(
        reader().read_file(temp_file.path()),
        Err(Error::Io { .. })
    ));
}
