//! Plain-text point files.
//!
//! One point per line, coordinates joined by a separator (`,` by default),
//! no header. Floats are written in Rust's shortest round-trip form, so a
//! file read back with [`read_points`] reproduces the exact `f64` values.
//!
//! ```
//! use cloudgen_core::types::Point;
//! use cloudgen_record::{read_points, PointWriter};
//!
//! let mut writer = PointWriter::new(Vec::new());
//! writer.write_point(&Point::from([1.0, 0.5, -2.0])).unwrap();
//! let bytes = writer.into_inner().unwrap();
//! assert_eq!(bytes, b"1,0.5,-2\n");
//!
//! let points = read_points(bytes.as_slice(), ',').unwrap();
//! assert_eq!(points[0].coords(), &[1.0, 0.5, -2.0]);
//! ```

pub mod error;
pub mod reader;
pub mod writer;

pub use error::RecordError;
pub use reader::{read_points, read_points_from_path};
pub use writer::{PointWriter, DEFAULT_SEPARATOR};
