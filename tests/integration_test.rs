//! Integration tests for tabstream

use std::io::Write;

use tabstream::{read_path, read_str, CellValue, ReadOptions, Row, RowCursor};
use tempfile::NamedTempFile;

fn temp_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn s(v: &str) -> CellValue {
    CellValue::Str(v.to_string())
}

/// Collect streaming output and compare it row-for-row with the whole-buffer
/// reader — the key equivalence property.
fn assert_stream_matches_whole(content: &[u8], options: &ReadOptions) {
    let file = temp_file(content);

    let table = read_path(file.path(), options).unwrap();

    let mut cursor = RowCursor::open(file.path(), options.clone()).unwrap();
    let streamed: Vec<Row> = cursor
        .rows()
        .collect::<tabstream::Result<_>>()
        .unwrap();

    assert_eq!(streamed, table.rows());
    assert_eq!(cursor.headers(), table.header());
}

#[test]
fn test_quoted_delimiter_and_coercion_example() {
    let file = temp_file(b"a,b,\"c,d\"\n1,2,3\n");
    let table = read_path(file.path(), &ReadOptions::new()).unwrap();

    assert_eq!(table.rows()[0].cells, vec![s("a"), s("b"), s("c,d")]);
    assert_eq!(
        table.rows()[1].cells,
        vec![CellValue::Int(1), CellValue::Int(2), CellValue::Int(3)]
    );
}

#[test]
fn test_header_example() {
    let file = temp_file(b"name,age\nAlice,30\n");
    let options = ReadOptions::new().with_header(true);
    let table = read_path(file.path(), &options).unwrap();

    assert_eq!(table.header().unwrap().to_strings(), vec!["name", "age"]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].cells, vec![s("Alice"), CellValue::Int(30)]);
}

#[test]
fn test_start_row_example() {
    let file = temp_file(b"skip-me,0\nkeep,1\nkeep,2\n");
    let options = ReadOptions::new().with_start_row(1);
    let table = read_path(file.path(), &options).unwrap();

    assert_eq!(table.rows()[0].cells, vec![s("keep"), CellValue::Int(1)]);
    assert_eq!(table.rows()[1].cells, vec![s("keep"), CellValue::Int(2)]);
}

#[test]
fn test_streaming_equivalence_plain() {
    assert_stream_matches_whole(b"a,1\nb,2\nc,3\n", &ReadOptions::new());
}

#[test]
fn test_streaming_equivalence_quoted_newlines_and_crlf() {
    let content = b"h1,h2\r\n\"multi\r\nline\",2\r\nplain,3\r\n";
    let options = ReadOptions::new().with_header(true);
    assert_stream_matches_whole(content, &options);
}

#[test]
fn test_streaming_equivalence_start_row_and_no_terminator() {
    let content = b"junk\nname;age\nAlice;30\nBob;25";
    let options = ReadOptions::new()
        .with_delimiters(";")
        .with_start_row(1)
        .with_header(true);
    assert_stream_matches_whole(content, &options);
}

#[test]
fn test_streaming_equivalence_multi_delims_and_quotes() {
    let content = b"a;b,'c;d'\n1;2,3\n\nx\n";
    let options = ReadOptions::new().with_delimiters(",;").with_quotes("'\"");
    assert_stream_matches_whole(content, &options);
}

#[test]
fn test_streaming_equivalence_legacy_encoding() {
    // caf\xE9 is windows-1252; exercises non-UTF-8 offset arithmetic.
    let content = b"caf\xE9,1\nbar,2\n";
    let options = ReadOptions::new().with_encoding("windows-1252");
    assert_stream_matches_whole(content, &options);
}

#[test]
fn test_utf16le_with_bom() {
    let text = "name,city\nZo\u{eb},G\u{f6}teborg\n";
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let file = temp_file(&bytes);

    let options = ReadOptions::new().with_encoding("utf-16le").with_header(true);
    let table = read_path(file.path(), &options).unwrap();
    assert_eq!(table.rows()[0].cells, vec![s("Zo\u{eb}"), s("G\u{f6}teborg")]);

    assert_stream_matches_whole(&bytes, &options);
}

#[test]
fn test_gzip_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv.gz");
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"a,1\nb,2\n").unwrap();
        encoder.finish().unwrap();
    }

    let table = read_path(&path, &ReadOptions::new()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[1].cells, vec![s("b"), CellValue::Int(2)]);

    let mut cursor = RowCursor::open(&path, ReadOptions::new()).unwrap();
    let streamed: Vec<Row> = cursor.rows().collect::<tabstream::Result<_>>().unwrap();
    assert_eq!(streamed, table.rows());
}

#[test]
fn test_malformed_bytes_error() {
    let file = temp_file(&[b'a', b',', 0xFF, 0xFE, b'\n']);
    let err = read_path(file.path(), &ReadOptions::new()).unwrap_err();
    assert!(matches!(err, tabstream::Error::Decode { .. }));
}

#[test]
fn test_reparse_never_contains_header_again() {
    let options = ReadOptions::new().with_header(true);
    let table = read_str("name,age\nAlice,30\nBob,25\n", &options).unwrap();

    let rendered: Vec<String> = table
        .rows()
        .iter()
        .map(|row| row.to_strings().join(","))
        .collect();
    let reparsed = read_str(&rendered.join("\n"), &ReadOptions::new()).unwrap();

    assert_eq!(reparsed.len(), table.len());
    for row in reparsed.rows() {
        assert_ne!(row.to_strings(), vec!["name", "age"]);
    }
}

#[test]
fn test_row_count_property() {
    // 5 physical lines (last without terminator), start_row 1, header:
    // 5 - 1 - 1 = 3 data rows.
    let options = ReadOptions::new().with_start_row(1).with_header(true);
    let table = read_str("x\nh\na\nb\nc", &options).unwrap();
    assert_eq!(table.len(), 3);
}

#[test]
fn test_column_accessor_null_markers() {
    let table = read_str("a,b,c\nd\n", &ReadOptions::new()).unwrap();
    let col = table.column(5);
    assert_eq!(col, vec![None, None]);
}
