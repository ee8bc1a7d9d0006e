use runstat::error::MeasureError;
use runstat::table::Table;

#[test]
fn test_parse_skips_blank_and_comment_lines() {
    let text = "# n user kernel\n0 10 4\n\n1 12 5\n   \n2 11 6\n";
    let table = Table::parse(text).unwrap();
    assert_eq!(table.shape(), (3, 3));
    assert_eq!(table.row(1), &[1.0, 12.0, 5.0]);
}

#[test]
fn test_parse_handles_repeated_whitespace() {
    let table = Table::parse("1\t 2    3\n4 5\t6").unwrap();
    assert_eq!(table.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(table.row(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_parse_rejects_text() {
    match Table::parse("0 1 2\nReading from /dev/fibonacci at offset 0\n") {
        Err(MeasureError::Parse { line, token }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "Reading");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_ragged_rows() {
    match Table::parse("1 2 3\n4 5\n") {
        Err(MeasureError::Ragged {
            line,
            expected,
            found,
        }) => {
            assert_eq!((line, expected, found), (2, 3, 2));
        }
        other => panic!("expected ragged error, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_empty_output() {
    assert!(matches!(
        Table::parse("\n# nothing\n"),
        Err(MeasureError::Malformed(_))
    ));
}

#[test]
fn test_transpose() {
    let table = Table::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let t = table.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.row(0), &[1.0, 4.0]);
    assert_eq!(t.row(2), &[3.0, 6.0]);
    assert_eq!(t.transpose(), table);
}

#[test]
fn test_split_first_row() {
    let table = Table::from_rows(vec![vec![0.0, 1.0], vec![7.0, 8.0], vec![3.0, 4.0]]).unwrap();
    let (first, rest) = table.split_first_row().unwrap();
    assert_eq!(first, vec![0.0, 1.0]);
    assert_eq!(rest.shape(), (2, 2));
    assert_eq!(rest.row(1), &[3.0, 4.0]);

    let only_x = Table::from_rows(vec![vec![0.0, 1.0]]).unwrap();
    assert!(only_x.split_first_row().is_err());
}

#[test]
fn test_parse_strips_trailing_comments() {
    let table = Table::parse("0 10 4 # warm-up\n1 12 5#\n# 2 99 99\n").unwrap();
    assert_eq!(table.shape(), (2, 3));
    assert_eq!(table.row(0), &[0.0, 10.0, 4.0]);
    assert_eq!(table.row(1), &[1.0, 12.0, 5.0]);
}

#[test]
fn test_iter_rows_matches_row_count() {
    let empty_rows = Table::zeros(3, 0);
    assert_eq!(empty_rows.iter_rows().count(), 3);
    assert!(empty_rows.iter_rows().all(|r| r.is_empty()));

    let table = Table::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let rows: Vec<&[f64]> = table.iter_rows().collect();
    assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
}
