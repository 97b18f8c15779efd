//! Tests for PNG rendering and export

#[cfg(test)]
mod tests {
    use gridalgo::AlgorithmError;
    use gridalgo::algorithm::ResultData;
    use gridalgo::io::configuration::{CELL_COLORS, MOVE_COLOR, PATH_COLOR};
    use gridalgo::io::image::{export_grid_as_png, render_grid};
    use gridalgo::spatial::{AlgoPoint, CellState, Grid};
    use tempfile::TempDir;

    fn pixel(img: &image::RgbaImage, x: u32, y: u32) -> Option<[u8; 4]> {
        img.get_pixel_checked(x, y).map(|p| p.0)
    }

    fn colour(state: CellState) -> Option<[u8; 4]> {
        CELL_COLORS.get(usize::from(state.code())).copied()
    }

    // Tests cells are drawn as blocks in their state colour
    // Verified by transposing rows and columns
    #[test]
    fn test_render_cells() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, CellState::Blue);

        let Ok(img) = render_grid(&grid, None, 4) else {
            unreachable!("grid is renderable");
        };

        assert_eq!(img.dimensions(), (12, 8));
        assert_eq!(pixel(&img, 0, 0), colour(CellState::Empty));
        assert_eq!(pixel(&img, 11, 7), colour(CellState::Blue));
        assert_eq!(pixel(&img, 8, 4), colour(CellState::Blue));
    }

    // Tests path and move overlays tint their cells
    // Verified by ignoring the overlay
    #[test]
    fn test_render_overlays() {
        let grid = Grid::new(3, 3);
        let path = ResultData::Path(vec![AlgoPoint::new(0, 0), AlgoPoint::new(1, 0)]);
        let chosen = ResultData::Move(AlgoPoint::new(2, 1));

        let (Ok(with_path), Ok(with_move)) = (
            render_grid(&grid, Some(&path), 1),
            render_grid(&grid, Some(&chosen), 1),
        ) else {
            unreachable!("grid is renderable");
        };

        assert_eq!(pixel(&with_path, 1, 0), Some(PATH_COLOR));
        assert_eq!(pixel(&with_path, 2, 0), colour(CellState::Empty));
        assert_eq!(pixel(&with_move, 2, 1), Some(MOVE_COLOR));
    }

    // Tests a grid payload is drawn instead of the input
    // Verified by drawing the input grid
    #[test]
    fn test_render_replacement_grid() {
        let grid = Grid::new(2, 2);
        let replacement = ResultData::Grid(Grid::filled(2, 2, CellState::Black));

        let Ok(img) = render_grid(&grid, Some(&replacement), 1) else {
            unreachable!("grid is renderable");
        };

        assert_eq!(pixel(&img, 1, 1), colour(CellState::Black));
    }

    // Tests degenerate sizes are rejected
    // Verified by producing a zero-sized image
    #[test]
    fn test_render_errors() {
        assert!(matches!(
            render_grid(&Grid::new(2, 2), None, 0),
            Err(AlgorithmError::InvalidParameter { parameter: "cell_size", .. })
        ));
        assert!(matches!(
            render_grid(&Grid::new(0, 0), None, 4),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
    }

    // Tests export writes a PNG into a fresh directory
    // Verified by skipping directory creation
    #[test]
    fn test_export_png() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temp dir");
        };
        let path = dir.path().join("images").join("board.png");

        assert!(export_grid_as_png(&Grid::new(3, 3), None, 2, &path).is_ok());
        assert!(path.exists());
    }
}
