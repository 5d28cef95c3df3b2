//! Widget draw scale
//!
//! Widgets are drawn at a fixed size, so the scale has to follow the size of
//! the referenced geometry. The curve below is empirical tuning: `ln(L)^3 / 10`
//! rounded, never below 1.

/// Scale used when no size information is available (vertices)
pub fn default_scale() -> u32 {
    1
}

/// Scale for an edge of the given length
pub fn edge_scale(length: f64) -> u32 {
    if !length.is_finite() || length <= 0.0 {
        return default_scale();
    }
    let ln = length.ln();
    let raw = (ln * ln * ln / 10.0).round();
    if raw > 1.0 {
        // Saturating cast; only reachable for astronomically large lengths
        raw as u32
    } else {
        default_scale()
    }
}

/// Scale for a face with the given u and v extents
pub fn face_scale(u_length: f64, v_length: f64) -> u32 {
    edge_scale((u_length + v_length) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        assert_eq!(default_scale(), 1);
    }

    #[test]
    fn test_small_lengths_use_minimum() {
        for length in [0.0, -3.0, 1e-9, 0.5, 1.0, 5.0, 7.0] {
            assert_eq!(edge_scale(length), 1, "length {length}");
        }
        assert_eq!(edge_scale(f64::NAN), 1);
        assert_eq!(edge_scale(f64::INFINITY), 1);
    }

    #[test]
    fn test_breakpoints() {
        // ln(L)^3 / 10 crosses 1.5 near L = 11.8
        assert_eq!(edge_scale(11.0), 1);
        assert_eq!(edge_scale(12.0), 2);
        assert_eq!(edge_scale(100.0), 10);
        assert_eq!(edge_scale(1000.0), 33);
    }

    #[test]
    fn test_edge_scale_is_monotonic() {
        let mut previous = edge_scale(0.01);
        let mut length = 0.01;
        while length < 1.0e7 {
            let scale = edge_scale(length);
            assert!(scale >= 1);
            assert!(scale >= previous, "length {length}: {scale} < {previous}");
            previous = scale;
            length *= 1.1;
        }
    }

    #[test]
    fn test_face_scale_uses_mean_extent() {
        assert_eq!(face_scale(100.0, 100.0), edge_scale(100.0));
        assert_eq!(face_scale(50.0, 150.0), edge_scale(100.0));
        assert_eq!(face_scale(1.0, 1.0), 1);
        assert!(face_scale(200.0, 200.0) >= face_scale(100.0, 100.0));
    }
}
