//! Exact integer building blocks: square roots, rationals, decimal
//! formatting and the protocol tick math.

pub mod format;
pub mod math_helpers;
pub mod rational;
pub mod tick_math;
