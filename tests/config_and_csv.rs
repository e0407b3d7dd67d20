//! Integration tests for format options and CSV export.

use std::io::Write;

use ndarray::array;
use npframe::io::write_csv_to;
use npframe::{write_csv, DataFrame, FormatOptions};

// ---------------------------------------------------------------------------
// FormatOptions
// ---------------------------------------------------------------------------

#[test]
fn format_options_default_values() {
    let opts = FormatOptions::default();
    assert_eq!(opts.precision, 6);
    assert_eq!(opts.min_index_width, 5);
    assert_eq!(opts.padding, 2);
    assert_eq!(opts.max_rows, None);
}

#[test]
fn default_options_match_display() {
    let df = DataFrame::new(array![[1.0, 2.0], [3.0, 4.0]], ["a", "b"]).unwrap();
    assert_eq!(df.to_text_with(&FormatOptions::default()), df.to_string());
}

#[test]
fn format_options_json_roundtrip() {
    let opts = FormatOptions::new(3, Some(10));
    let json = serde_json::to_string_pretty(&opts).unwrap();
    assert!(json.contains("precision"));
    let back: FormatOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opts);
}

#[test]
fn format_options_from_partial_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("format.json");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, r#"{{ "precision": 2 }}"#).unwrap();

    let opts = FormatOptions::from_json_file(&path).unwrap();
    assert_eq!(opts.precision, 2);
    assert_eq!(opts.padding, 2);
    assert_eq!(opts.max_rows, None);
}

#[test]
fn format_options_missing_file_errors() {
    assert!(FormatOptions::from_json_file("/nonexistent/path/format.json").is_err());
}

#[test]
fn custom_precision_changes_widths() {
    let df = DataFrame::new(array![[1.25]], ["v"]).unwrap();
    let text = df.to_text_with(&FormatOptions::new(2, None));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "          v");
    assert_eq!(lines[2], "   0   1.25");
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

#[test]
fn csv_has_header_and_rows() {
    let df = DataFrame::new(array![[1.5, 2.0], [3.0, -4.25]], ["x", "y"]).unwrap();
    let mut buf = Vec::new();
    write_csv_to(&df, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "x,y\n1.5,2\n3,-4.25\n");
}

#[test]
fn csv_for_columns_only_frame_is_header() {
    let df: DataFrame = DataFrame::with_columns(["a", "b", "c"]);
    let mut buf = Vec::new();
    write_csv_to(&df, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "a,b,c\n");
}

#[test]
fn tsv_extension_switches_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.tsv");
    let df = DataFrame::new(array![[1.0, 2.0]], ["a", "b"]).unwrap();
    write_csv(&df, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\tb\n1\t2\n");
}

#[test]
fn csv_into_missing_directory_errors() {
    let df = DataFrame::new(array![[1.0]], ["a"]).unwrap();
    assert!(write_csv(&df, "/nonexistent/dir/out.csv").is_err());
}
