//! Numeric input for shape arguments.
//!
//! Coordinates and sizes may be given as any primitive integer or float.
//! They are converted to the `i32` grid exactly once with [`truncate`], which
//! discards the fractional part (toward zero). This is not rounding and it
//! cannot be undone: `2.9` becomes `2` and `-2.9` becomes `-2`.

use crate::error::{RasterError, Result};

/// A primitive numeric value accepted as a shape argument.
pub trait Number: Copy {
    /// Widen to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_number {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Truncate toward zero into the pixel grid.
///
/// NaN, infinities and values outside the `i32` range are rejected as
/// validation errors naming `field`.
///
/// # Examples
///
/// ```
/// use pixgeom::number::truncate;
///
/// assert_eq!(truncate(2.9, "x").unwrap(), 2);
/// assert_eq!(truncate(-2.9, "x").unwrap(), -2);
/// assert!(truncate(f64::NAN, "x").is_err());
/// ```
pub fn truncate(value: f64, field: &str) -> Result<i32> {
    if !value.is_finite() {
        return Err(RasterError::validation(field, format!("must be a finite number, got {}", value)));
    }
    let truncated = value.trunc();
    if truncated < i32::MIN as f64 || truncated > i32::MAX as f64 {
        return Err(RasterError::validation(field, format!("{} is outside the pixel grid", value)));
    }
    Ok(truncated as i32)
}

/// Reject a non-finite real argument that is used without truncation
/// (angles, stretch factors, radii before scaling).
pub(crate) fn finite(value: f64, field: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RasterError::validation(field, format!("must be a finite number, got {}", value)))
    }
}

/// Truncate a coordinate pair.
pub(crate) fn truncate_point<N: Number>(x: N, y: N, field: &str) -> Result<(i32, i32)> {
    let x = truncate(x.to_f64(), field)?;
    let y = truncate(y.to_f64(), field)?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(truncate(0.99, "x").unwrap(), 0);
        assert_eq!(truncate(-0.99, "x").unwrap(), 0);
        assert_eq!(truncate(7.0, "x").unwrap(), 7);
        assert_eq!(truncate(-7.5, "x").unwrap(), -7);
    }

    #[test]
    fn test_truncate_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = truncate(value, "radius").unwrap_err();
            assert!(matches!(err, RasterError::Validation { ref field, .. } if field == "radius"));
        }
    }

    #[test]
    fn test_truncate_rejects_out_of_range() {
        assert!(truncate(1e12, "x").is_err());
        assert!(truncate(-1e12, "x").is_err());
        assert_eq!(truncate(i32::MAX as f64, "x").unwrap(), i32::MAX);
    }

    #[test]
    fn test_number_widening() {
        assert_eq!(3u8.to_f64(), 3.0);
        assert_eq!((-3i64).to_f64(), -3.0);
        assert_eq!(1.5f32.to_f64(), 1.5);
    }

    #[test]
    fn test_truncate_point() {
        assert_eq!(truncate_point(3.9, -2.7, "start").unwrap(), (3, -2));
        assert!(truncate_point(f64::NAN, 0.0, "start").is_err());
    }

    #[test]
    fn test_finite() {
        assert_eq!(finite(1.5, "stretch").unwrap(), 1.5);
        assert!(finite(f64::INFINITY, "stretch").is_err());
    }
}
