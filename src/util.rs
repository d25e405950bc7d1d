/// Numeric output conversion.
///
/// This module provides the [`NumericOutput`](num::NumericOutput) trait,
/// which turns the `f64` a finished evaluation produces into whichever
/// numeric type the caller asked for, with a deliberate, documented rule
/// for integral targets (ceiling before truncation).
pub mod num;
