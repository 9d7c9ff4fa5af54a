use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: cannot parse '{field}' as a number")]
    Parse { line: usize, field: String },

    #[error("line {line}: fields are not separated by the expected separator")]
    BadSeparator { line: usize },

    #[error("line {line}: expected {expected} fields, got {got}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("separator {0:?} must be ASCII and not part of a number or a line break")]
    InvalidSeparator(char),

    #[error("CSV error: {0}")]
    Csv(csv::Error),
}

/// Row-length errors become [`RecordError::RaggedRow`]; everything else is
/// kept as is.
impl From<csv::Error> for RecordError {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = err.kind()
        {
            return Self::RaggedRow {
                line: line_of(pos.as_ref()),
                expected: to_usize(*expected_len),
                got: to_usize(*len),
            };
        }
        Self::Csv(err)
    }
}

/// 1-based line number of a record, 0 if csv did not track it.
pub(crate) fn line_of(pos: Option<&csv::Position>) -> usize {
    pos.map_or(0, |p| to_usize(p.line()))
}

fn to_usize(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}
