//! Well-known binary, restricted to two dimensions.
//!
//! ```text
//! u8   byte order (0 = big endian, 1 = little endian)
//! u32  geometry type code
//! ...  payload in that byte order
//! ```
//!
//! Members of multi-geometries are complete encodings with their own byte order and type code.

mod reader;
mod types;
mod writer;

pub use reader::*;
pub use types::*;
pub use writer::*;
