//! Tests for the shared local error and cumulative cost planes

#[cfg(test)]
mod tests {
    use seamcut::algorithm::buffer::CostPlanes;

    // Tests that both planes start zeroed with the requested shape
    #[test]
    fn test_new_planes_are_zeroed() {
        let planes = CostPlanes::new(4, 3);

        assert_eq!(planes.local_plane().dim(), (4, 3));
        assert_eq!(planes.cumulative_plane().dim(), (4, 3));
        assert!(planes.local_plane().iter().all(|&v| v == 0.0));
        assert!(planes.cumulative_plane().iter().all(|&v| v == 0.0));
    }

    // Tests that writes to one plane never show up in the other
    // Breaks if both views address the same plane
    #[test]
    fn test_planes_are_independent() {
        let mut planes = CostPlanes::new(2, 2);

        if let Some(cell) = planes.local_plane_mut().get_mut([1, 0]) {
            *cell = 3.5;
        }
        {
            let (_, mut cumulative) = planes.split_mut();
            if let Some(cell) = cumulative.get_mut([0, 1]) {
                *cell = 7.0;
            }
        }

        assert_eq!(planes.local(1, 0), Some(3.5));
        assert_eq!(planes.cumulative(1, 0), Some(0.0));
        assert_eq!(planes.cumulative(0, 1), Some(7.0));
        assert_eq!(planes.local(0, 1), Some(0.0));
    }

    // Tests out-of-range cells are reported instead of panicking
    #[test]
    fn test_out_of_range_access() {
        let planes = CostPlanes::new(2, 3);

        assert_eq!(planes.local(2, 0), None);
        assert_eq!(planes.cumulative(0, 3), None);
        assert_eq!(planes.local(5, 5), None);
    }

    // Tests that split views address the same storage as the cell accessors
    #[test]
    fn test_split_mut_views() {
        let mut planes = CostPlanes::new(3, 2);
        if let Some(cell) = planes.local_plane_mut().get_mut([2, 1]) {
            *cell = 1.25;
        }

        {
            let (local, mut cumulative) = planes.split_mut();
            assert_eq!(local.dim(), (3, 2));
            assert_eq!(local.get([2, 1]).copied(), Some(1.25));
            if let Some(cell) = cumulative.get_mut([1, 0]) {
                *cell = 9.0;
            }
        }

        assert_eq!(planes.cumulative(1, 0), Some(9.0));
        assert_eq!(planes.local(1, 0), Some(0.0));
    }
}
