//! Tests for seam constants and runtime defaults

#[cfg(test)]
mod tests {
    use seamcut::io::configuration::{
        CUT_BLEND_WEIGHT, DEFAULT_LOG_FILTER, DEFAULT_OVERLAP, OUTPUT_SUFFIX, PARALLEL_MIN_CELLS,
        SEAM_HIGHLIGHT, VISUALIZATION_SUFFIX,
    };

    // Tests the cut pixel is an even blend of both sources
    // Verified by changing the weight to 0.25
    #[test]
    fn test_cut_blend_weight() {
        assert!((CUT_BLEND_WEIGHT - 0.5).abs() < f64::EPSILON);
    }

    // Tests the parallel threshold and default overlap values
    // Verified by changing the constant values
    #[test]
    fn test_size_defaults() {
        assert_eq!(PARALLEL_MIN_CELLS, 4096);
        assert_eq!(DEFAULT_OVERLAP, 16);
    }

    // Tests output naming suffixes differ so overlays never overwrite joins
    #[test]
    fn test_output_suffixes() {
        assert_eq!(OUTPUT_SUFFIX, "_joined");
        assert_eq!(VISUALIZATION_SUFFIX, "_seam");
        assert_ne!(OUTPUT_SUFFIX, VISUALIZATION_SUFFIX);
    }

    // Tests the highlight color is fully opaque
    #[test]
    fn test_seam_highlight_opaque() {
        assert_eq!(SEAM_HIGHLIGHT[3], 255);
    }

    // Tests the fallback log filter targets this crate
    #[test]
    fn test_default_log_filter() {
        assert!(DEFAULT_LOG_FILTER.starts_with("seamcut="));
    }
}
