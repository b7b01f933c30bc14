/// The exclusive upper bound for a single trim proportion
pub const MAX_TRIM_PROPORTION: f64 = 0.5;
