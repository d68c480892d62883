//! Seed values for the demonstration records.

pub const OUTER_X: i32 = 10;
pub const OUTER_Z: i32 = 30;
pub const INNER_X: i32 = 20;
pub const INNER_Z: i32 = 85;
