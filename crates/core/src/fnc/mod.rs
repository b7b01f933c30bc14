pub mod math;
pub mod util;
