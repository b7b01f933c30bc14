pub mod number;
pub mod trim;

pub use self::number::{Sort, Sorted};
pub use self::trim::{Bounds, TrimSpec};
