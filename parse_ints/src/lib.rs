pub mod scalar;

pub use scalar::{parse_ints, parse_leading, ParseIntsError};
