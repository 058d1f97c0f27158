#[cfg(test)]
mod tests {

    use crate::core::timecode::{clamp_to_range, coerce_finite, format_timestamp};

    #[test]
    fn test_format_timestamp_nan_displays_zero() {
        assert_eq!(format_timestamp(f64::NAN), "0:00");
    }

    #[test]
    fn test_format_timestamp_pads_seconds() {
        assert_eq!(format_timestamp(5.0), "0:05");
        assert_eq!(format_timestamp(65.9), "1:05");
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(125.0), "2:05");
        assert_eq!(format_timestamp(600.0), "10:00");
    }

    #[test]
    fn test_format_timestamp_floor_truncates() {
        assert_eq!(format_timestamp(59.99), "0:59");
        assert_eq!(format_timestamp(119.4), "1:59");
    }

    #[test]
    fn test_coerce_finite() {
        assert_eq!(coerce_finite(3.5), 3.5);
        assert_eq!(coerce_finite(f64::NAN), 0.0);
        assert_eq!(coerce_finite(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_clamp_to_range_bounds() {
        assert_eq!(clamp_to_range(-5.0, 100.0), 0.0);
        assert_eq!(clamp_to_range(500.0, 100.0), 100.0);
        assert_eq!(clamp_to_range(42.0, 100.0), 42.0);
    }

    #[test]
    fn test_clamp_to_range_degenerate_max() {
        // Unknown duration collapses the range instead of panicking
        assert_eq!(clamp_to_range(10.0, f64::NAN), 0.0);
        assert_eq!(clamp_to_range(10.0, -3.0), 0.0);
    }
}
