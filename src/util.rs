/// Numeric helpers.
///
/// This module provides checked integer conversions and the floor-based
/// division and modulo used by the `//` and `%` operators.
pub mod num;
