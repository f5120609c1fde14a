//! Input Validation Utilities
//!
//! This module provides validation helpers used at the pipeline boundary and
//! by the configuration types, so that malformed parameters surface as
//! [`GridScanError::InvalidInput`] instead of producing garbage masks.

use crate::core::GridScanError;

/// Validates that a value is positive (> 0).
#[inline]
pub fn validate_positive<T: PartialOrd + std::fmt::Display + Default>(
    value: T,
    param_name: &str,
) -> Result<(), GridScanError> {
    if value <= T::default() {
        return Err(GridScanError::InvalidInput {
            message: format!(
                "Parameter '{}' must be positive, got: {}",
                param_name, value
            ),
        });
    }
    Ok(())
}

/// Validates that image dimensions describe at least one pixel.
#[inline]
pub fn validate_image_dimensions(width: u32, height: u32) -> Result<(), GridScanError> {
    if width == 0 || height == 0 {
        return Err(GridScanError::InvalidInput {
            message: format!("Image must have nonzero dimensions, got: {}x{}", width, height),
        });
    }
    Ok(())
}

/// Validates an adaptive threshold window: odd and at least the minimum.
#[inline]
pub fn validate_threshold_window(window: u32, min: u32) -> Result<(), GridScanError> {
    if window < min {
        return Err(GridScanError::InvalidInput {
            message: format!(
                "Parameter 'window_size' must be at least {}, got: {}",
                min, window
            ),
        });
    }
    if window % 2 == 0 {
        return Err(GridScanError::InvalidInput {
            message: format!("Parameter 'window_size' must be odd, got: {}", window),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_accepts_positive_values() {
        assert!(validate_positive(30u32, "divisor").is_ok());
        assert!(validate_positive(1usize, "threshold").is_ok());
    }

    #[test]
    fn positive_rejects_zero() {
        let err = validate_positive(0u32, "divisor").unwrap_err();
        assert!(err.to_string().contains("divisor"));
    }

    #[test]
    fn dimensions_reject_zero_sides() {
        assert!(validate_image_dimensions(100, 80).is_ok());
        assert!(validate_image_dimensions(0, 80).is_err());
        assert!(validate_image_dimensions(100, 0).is_err());
    }

    #[test]
    fn threshold_window_must_be_odd() {
        assert!(validate_threshold_window(15, 3).is_ok());
        assert!(validate_threshold_window(3, 3).is_ok());

        let err = validate_threshold_window(14, 3).unwrap_err();
        assert!(err.to_string().contains("odd"));
    }

    #[test]
    fn threshold_window_enforces_minimum() {
        let err = validate_threshold_window(1, 3).unwrap_err();
        assert!(err.to_string().contains("at least 3"));
    }
}
