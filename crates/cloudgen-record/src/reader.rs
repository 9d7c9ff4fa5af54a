//! Point file reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use cloudgen_core::types::Point;

use crate::error::{line_of, RecordError};
use crate::writer::{is_numeric_char, separator_byte};

/// Parse every point from `reader`, fields split on `separator`.
///
/// Blank lines are skipped and whitespace around fields is ignored. Every
/// row must have as many fields as the first. Line numbers in errors are
/// 1-based.
///
/// # Errors
///
/// [`RecordError::Parse`] for a field that is not a number,
/// [`RecordError::BadSeparator`] when a line only parses if split on some
/// other separator, [`RecordError::RaggedRow`] for a row with the wrong
/// field count, [`RecordError::InvalidSeparator`] for an unusable
/// `separator`, and [`RecordError::Csv`] for read failures.
pub fn read_points<R: Read>(reader: R, separator: char) -> Result<Vec<Point>, RecordError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(separator_byte(separator)?)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = line_of(record.position());
        let coords = record
            .iter()
            .map(|field| parse_field(field, line))
            .collect::<Result<Vec<f64>, _>>()?;
        points.push(Point::new(coords));
    }
    Ok(points)
}

/// Open `path` and read its points.
///
/// # Errors
///
/// As [`read_points`], plus [`RecordError::Io`] if the file cannot be opened.
pub fn read_points_from_path(
    path: impl AsRef<Path>,
    separator: char,
) -> Result<Vec<Point>, RecordError> {
    read_points(File::open(path)?, separator)
}

fn parse_field(field: &str, line: usize) -> Result<f64, RecordError> {
    field.parse::<f64>().map_err(|_| {
        if looks_like_other_separator(field) {
            RecordError::BadSeparator { line }
        } else {
            RecordError::Parse {
                line,
                field: field.to_owned(),
            }
        }
    })
}

/// True if `field` is several numbers joined by something else.
fn looks_like_other_separator(field: &str) -> bool {
    let parts: Vec<&str> = field
        .split(|c: char| !is_numeric_char(c))
        .filter(|part| !part.is_empty())
        .collect();
    parts.len() > 1 && parts.iter().all(|part| part.parse::<f64>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::PointWriter;
    use std::io::Cursor;

    fn read(text: &str) -> Result<Vec<Point>, RecordError> {
        read_points(Cursor::new(text), ',')
    }

    // -- Parsing --

    #[test]
    fn reads_rows() {
        let points = read("1,2,3\n-0.5,1e-3,4\n").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].coords(), &[-0.5, 0.001, 4.0]);
    }

    #[test]
    fn skips_blank_lines_and_whitespace() {
        let points = read("\n1, 2\n\n  3 ,4  \n\n").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].coords(), &[3.0, 4.0]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn reads_back_what_writer_wrote() {
        let original = vec![
            Point::from([0.1, 0.2, 0.30000000000000004]),
            Point::from([-1e10, 5e-324, 2.0]),
        ];
        let mut w = PointWriter::new(Vec::new());
        w.write_all(&original).unwrap();
        let bytes = w.into_inner().unwrap();
        assert_eq!(read_points(bytes.as_slice(), ',').unwrap(), original);
    }

    // -- Errors --

    #[test]
    fn unparsable_field() {
        let err = read("1,2\n3,abc\n").unwrap_err();
        match err {
            RecordError::Parse { line, field } => {
                assert_eq!(line, 2);
                assert_eq!(field, "abc");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn wrong_separator() {
        let err = read("1;2;3\n").unwrap_err();
        assert!(matches!(err, RecordError::BadSeparator { line: 1 }));
        let err = read_points(Cursor::new("1,2\n"), '\t').unwrap_err();
        assert!(matches!(err, RecordError::BadSeparator { line: 1 }));
    }

    #[test]
    fn ragged_row() {
        let err = read("1,2,3\n\n4,5\n").unwrap_err();
        assert!(matches!(
            err,
            RecordError::RaggedRow {
                line: 3,
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn unusable_separator_rejected() {
        let err = read_points(Cursor::new("1.5\n"), '.').unwrap_err();
        assert!(matches!(err, RecordError::InvalidSeparator('.')));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_points_from_path("/nonexistent/cloudgen/points.csv", ',').unwrap_err();
        assert!(matches!(err, RecordError::Io(_)));
    }
}
