use std::fs;
use std::path::PathBuf;

use crate::errors::TableError;
use crate::formats::DelimitedReader;
use crate::model::CellValue;
use crate::registry::SourceFormat;
use crate::read_table;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn reads_standard_csv() {
    let table = read_table(&fixture_path("standard.csv")).expect("standard csv parse failed");

    assert_eq!(
        table.columns(),
        [
            "Name",
            "# of Skill Badges Completed",
            "# of Arcade Games Completed"
        ]
    );
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows()[1][0], CellValue::Text("Bob".into()));
    assert_eq!(table.rows()[1][2], CellValue::Number(5.0));
    assert!(!table.is_numeric_column(0));
    assert!(table.is_numeric_column(1));
    assert!(table.is_numeric_column(2));
}

#[test]
fn reads_messy_csv() {
    let table = read_table(&fixture_path("messy.csv")).expect("messy csv parse failed");

    assert_eq!(table.columns(), [" User Name ", "Progress", "Unnamed: 2"]);
    // Only the truly empty line disappears; rows of empty cells are kept.
    assert_eq!(table.row_count(), 5);

    let dana = &table.rows()[0];
    assert_eq!(dana[1], CellValue::Text("8/2".into()));
    assert_eq!(dana[2], CellValue::Empty);

    assert_eq!(table.rows()[1], vec![CellValue::Empty; 3]);

    let eli = &table.rows()[2];
    assert_eq!(eli[1], CellValue::Empty);
    assert_eq!(eli.len(), 3);

    let fay = &table.rows()[3];
    assert_eq!(fay[1], CellValue::Text("3, 4".into()));
    assert_eq!(fay.len(), 3);

    assert_eq!(table.rows()[4], vec![CellValue::Empty; 3]);
}

#[test]
fn rows_wider_than_header_are_rejected() {
    let input = "Name,Score
Ann,1
Ben,2,extra
";
    let err = DelimitedReader
        .parse_reader(input.as_bytes())
        .unwrap_err();

    match err {
        TableError::RowTooWide {
            line,
            expected,
            found,
            ..
        } => {
            assert_eq!(line, 3);
            assert_eq!((expected, found), (2, 3));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

fn two_sheet_workbook(path: &std::path::Path) {
    let mut workbook = rust_xlsxwriter::Workbook::new();

    let scores = workbook.add_worksheet();
    scores.write_string(0, 0, "Name").unwrap();
    scores.write_string(0, 1, "# of Skill Badges Completed").unwrap();
    scores.write_string(0, 2, "# of Arcade Games Completed").unwrap();
    scores.write_string(1, 0, "Alice").unwrap();
    scores.write_number(1, 1, 10).unwrap();
    scores.write_number(1, 2, 3).unwrap();
    // Row 2 is left blank.
    scores.write_string(3, 0, "Bob").unwrap();
    scores.write_number(3, 1, 10).unwrap();
    scores.write_number(3, 2, 5).unwrap();

    let archive = workbook.add_worksheet();
    archive.set_name("Archive").unwrap();
    archive.write_string(0, 0, "Team").unwrap();
    archive.write_string(1, 0, "Old data").unwrap();

    fs::write(path, workbook.save_to_buffer().unwrap()).expect("write workbook");
}

#[test]
fn reads_first_worksheet_of_workbook() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.xlsx");
    two_sheet_workbook(&path);

    let table = read_table(&path).expect("workbook parse failed");

    assert_eq!(
        table.columns(),
        [
            "Name",
            "# of Skill Badges Completed",
            "# of Arcade Games Completed"
        ]
    );
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows()[0][0], CellValue::Text("Alice".into()));
    assert_eq!(table.rows()[0][1], CellValue::Number(10.0));
    assert_eq!(table.rows()[1], vec![CellValue::Empty; 3]);
    assert_eq!(table.rows()[2][2], CellValue::Number(5.0));
    assert!(table.is_numeric_column(1));
}

#[test]
fn missing_file_is_not_found() {
    let err = read_table(&fixture_path("does-not-exist.csv")).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("does-not-exist.csv"));
}

#[test]
fn empty_file_has_no_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").expect("write empty file");

    let err = read_table(&path).unwrap_err();
    assert!(matches!(err, TableError::MissingHeader { .. }));
}

#[test]
fn corrupt_workbook_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.xlsx");
    fs::write(&path, "definitely not a zip archive").expect("write broken workbook");

    let err = read_table(&path).unwrap_err();
    assert!(matches!(err, TableError::Workbook { .. }));
}

#[test]
fn format_follows_extension() {
    assert_eq!(
        SourceFormat::from_path(&PathBuf::from("data.XLSX")),
        SourceFormat::Workbook
    );
    assert_eq!(
        SourceFormat::from_path(&PathBuf::from("data.xls")),
        SourceFormat::Workbook
    );
    assert_eq!(
        SourceFormat::from_path(&PathBuf::from("data.csv")),
        SourceFormat::Delimited
    );
    assert_eq!(
        SourceFormat::from_path(&PathBuf::from("data")),
        SourceFormat::Delimited
    );
}

#[test]
fn text_cells_are_typed() {
    let input = "a,b,c,d\n 12 ,12.5,inf,twelve\n";
    let table = DelimitedReader
        .parse_reader(input.as_bytes())
        .expect("inline csv parse failed");

    let row = &table.rows()[0];
    assert_eq!(row[0], CellValue::Number(12.0));
    assert_eq!(row[1], CellValue::Number(12.5));
    assert_eq!(row[2], CellValue::Text("inf".into()));
    assert_eq!(row[3], CellValue::Text("twelve".into()));
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let input: &[u8] = b"Name,Score\nZo\xffe,4\n";
    let table = DelimitedReader
        .parse_reader(input)
        .expect("lossy csv parse failed");

    assert_eq!(table.rows()[0][0], CellValue::Text("Zo\u{fffd}e".into()));
}

#[test]
fn numbers_render_without_trailing_zero() {
    assert_eq!(CellValue::Number(12.0).to_string(), "12");
    assert_eq!(CellValue::Number(12.5).to_string(), "12.5");
    assert_eq!(CellValue::Empty.to_string(), "");
}
