//! Tests for payload to drawable conversion

#[cfg(test)]
mod tests {
    use gridalgo::algorithm::ResultData;
    use gridalgo::io::overlay::{Drawable, to_drawable};
    use gridalgo::math::Quad;
    use gridalgo::spatial::{AlgoPoint, Grid};

    // Tests a path becomes a polyline through cell centres
    // Verified by mapping cell corners instead of centres
    #[test]
    fn test_path_polyline() {
        let quad = Quad::rectangle(4.0, 4.0);
        let data = ResultData::Path(vec![AlgoPoint::new(0, 0), AlgoPoint::new(1, 0)]);

        assert_eq!(
            to_drawable(&data, &quad, 2, 2),
            Drawable::Polyline(vec![[1.0, 1.0], [3.0, 1.0]])
        );
    }

    // Tests a move becomes a single marker
    // Verified by swapping column and row
    #[test]
    fn test_move_marker() {
        let quad = Quad::rectangle(4.0, 4.0);
        let data = ResultData::Move(AlgoPoint::new(1, 0));

        assert_eq!(
            to_drawable(&data, &quad, 2, 2),
            Drawable::Marker([3.0, 1.0])
        );
    }

    // Tests a grid payload is passed through cell by cell
    // Verified by dropping grid payloads
    #[test]
    fn test_grid_cells() {
        let grid = Grid::new(2, 3);
        let data = ResultData::Grid(grid.clone());

        assert_eq!(
            to_drawable(&data, &Quad::unit(), 2, 3),
            Drawable::Cells(grid)
        );
    }
}
