//! Streaming point writer.

use std::io::{self, Write};

use cloudgen_core::types::Point;

use crate::error::RecordError;

pub const DEFAULT_SEPARATOR: char = ',';

/// Characters that can appear inside a formatted `f64`.
pub(crate) fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E' | 'i' | 'n' | 'f' | 'N' | 'a')
}

/// Byte form of a field separator, rejecting anything that could be
/// confused with a number or a record terminator.
pub(crate) fn separator_byte(separator: char) -> Result<u8, RecordError> {
    if is_numeric_char(separator) || matches!(separator, '\n' | '\r' | '"') {
        return Err(RecordError::InvalidSeparator(separator));
    }
    u8::try_from(separator)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(RecordError::InvalidSeparator(separator))
}

/// Writes points one per line to any [`Write`] sink.
///
/// Output is buffered internally; call [`flush`](Self::flush) or
/// [`into_inner`](Self::into_inner) to push it to the sink.
#[derive(Debug)]
pub struct PointWriter<W: Write> {
    inner: csv::Writer<W>,
    separator: char,
    written: usize,
}

impl<W: Write> PointWriter<W> {
    /// Writer using [`DEFAULT_SEPARATOR`].
    pub fn new(inner: W) -> Self {
        Self {
            inner: build(inner, b','),
            separator: DEFAULT_SEPARATOR,
            written: 0,
        }
    }

    /// Writer with a custom field separator.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidSeparator`] if `separator` is not ASCII,
    /// could be mistaken for part of a number, or is a line break.
    pub fn with_separator(inner: W, separator: char) -> Result<Self, RecordError> {
        let byte = separator_byte(separator)?;
        Ok(Self {
            inner: build(inner, byte),
            separator,
            written: 0,
        })
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Append one point as a line.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Csv`] when the sink fails.
    pub fn write_point(&mut self, point: &Point) -> Result<(), RecordError> {
        self.inner
            .write_record(point.iter().map(ToString::to_string))?;
        self.written += 1;
        Ok(())
    }

    /// Append every point from `points`.
    ///
    /// # Errors
    ///
    /// Stops at the first failed write.
    pub fn write_all<'a>(
        &mut self,
        points: impl IntoIterator<Item = &'a Point>,
    ) -> Result<(), RecordError> {
        points.into_iter().try_for_each(|p| self.write_point(p))
    }

    /// Points written so far.
    #[must_use]
    pub const fn points_written(&self) -> usize {
        self.written
    }

    /// # Errors
    ///
    /// Propagates I/O errors from the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Flush and return the sink.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the final flush.
    pub fn into_inner(self) -> io::Result<W> {
        self.inner.into_inner().map_err(csv::IntoInnerError::into_error)
    }
}

fn build<W: Write>(inner: W, delimiter: u8) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(points: &[Point]) -> String {
        let mut w = PointWriter::new(Vec::new());
        w.write_all(points).unwrap();
        String::from_utf8(w.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn one_line_per_point_no_header() {
        let out = written(&[Point::from([1.0, 2.0]), Point::from([3.5, -4.25])]);
        assert_eq!(out, "1,2\n3.5,-4.25\n");
    }

    #[test]
    fn shortest_round_trip_representation() {
        let out = written(&[Point::from([0.1, 1e-300, f64::MAX])]);
        let fields: Vec<f64> = out
            .trim_end()
            .split(',')
            .map(|f| f.parse().unwrap())
            .collect();
        assert_eq!(fields, vec![0.1, 1e-300, f64::MAX]);
        assert!(out.starts_with("0.1,"));
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert_eq!(written(&[]), "");
    }

    #[test]
    fn counts_points() {
        let mut w = PointWriter::new(Vec::new());
        assert_eq!(w.points_written(), 0);
        w.write_point(&Point::from([0.0])).unwrap();
        w.write_point(&Point::from([1.0])).unwrap();
        assert_eq!(w.points_written(), 2);
    }

    #[test]
    fn custom_separator() {
        let mut w = PointWriter::with_separator(Vec::new(), '\t').unwrap();
        w.write_point(&Point::from([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(w.into_inner().unwrap(), b"1\t2\t3\n");
    }

    #[test]
    fn unusable_separator_rejected() {
        for sep in ['1', '.', '-', 'e', '\n', '"', 'µ'] {
            assert!(matches!(
                PointWriter::with_separator(Vec::new(), sep),
                Err(RecordError::InvalidSeparator(_))
            ));
        }
    }
}
