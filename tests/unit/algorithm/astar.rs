//! Tests for A* pathfinding between red endpoints

#[cfg(test)]
mod tests {
    use gridalgo::algorithm::astar::{AStarPathfinder, find_endpoints};
    use gridalgo::algorithm::{Engine, RunOptions};
    use gridalgo::io::configuration::{MESSAGE_NO_ENDPOINTS, MESSAGE_NO_PATH};
    use gridalgo::spatial::{AlgoPoint, CellState, Grid};

    fn walled_board() -> Grid {
        let mut grid = Grid::new(9, 9);
        grid.set(0, 0, CellState::Red);
        grid.set(8, 8, CellState::Red);
        for col in 0..8 {
            grid.set(4, col, CellState::Black);
        }
        grid
    }

    fn assert_valid_path(grid: &Grid, path: &[AlgoPoint]) {
        for pair in path.windows(2) {
            if let [a, b] = pair {
                assert!(a.is_adjacent(*b), "{a} and {b} are not adjacent");
            }
        }
        for point in path {
            assert_ne!(grid.at(*point), Some(CellState::Black), "{point} is a wall");
        }
    }

    // Tests the wall-with-one-gap board yields a 16 move path through the gap
    // Verified by allowing diagonal moves
    #[test]
    fn test_path_threads_single_gap() {
        let grid = walled_board();
        let Ok(result) = AStarPathfinder.run(&grid, &RunOptions::default()) else {
            unreachable!("A* never fails hard");
        };

        assert!(result.is_success());
        assert!(result.message().is_empty());
        let Some(path) = result.path() else {
            unreachable!("A* returns a path payload");
        };

        assert_eq!(path.len() - 1, 16);
        assert_eq!(path.first(), Some(&AlgoPoint::new(0, 0)));
        assert_eq!(path.last(), Some(&AlgoPoint::new(8, 8)));
        assert!(path.contains(&AlgoPoint::new(8, 4)));
        assert_valid_path(&grid, path);
    }

    // Tests a detour makes the path longer than the Manhattan distance
    // Verified by ignoring black cells during expansion
    #[test]
    fn test_path_length_is_shortest_with_detour() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 0, CellState::Red);
        grid.set(2, 4, CellState::Red);
        for row in 0..4 {
            grid.set(row, 2, CellState::Black);
        }

        let (path, _) = AStarPathfinder::search(&grid, AlgoPoint::new(0, 2), AlgoPoint::new(4, 2));
        let Some(path) = path else {
            unreachable!("the bottom row is open");
        };

        // Down to row 4, across, back up: 2 + 4 + 2
        assert_eq!(path.len() - 1, 8);
        assert_valid_path(&grid, &path);
    }

    // Tests fewer than two red cells is a modeled failure
    // Verified by treating a single red cell as both endpoints
    #[test]
    fn test_missing_endpoints() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, CellState::Red);

        let Ok(result) = AStarPathfinder.run(&grid, &RunOptions::default()) else {
            unreachable!("missing endpoints is not a hard error");
        };

        assert!(!result.is_success());
        assert_eq!(result.message(), MESSAGE_NO_ENDPOINTS);
        assert!(result.data().is_none());
    }

    // Tests an enclosed goal is a modeled failure
    // Verified by returning the partial route when the open set empties
    #[test]
    fn test_unreachable_goal() {
        let mut grid = walled_board();
        grid.set(4, 8, CellState::Black);

        let Ok(result) = AStarPathfinder.run(&grid, &RunOptions::default()) else {
            unreachable!("no path is not a hard error");
        };

        assert!(!result.is_success());
        assert_eq!(result.message(), MESSAGE_NO_PATH);
    }

    // Tests only the first goal candidate is targeted
    // Verified by choosing the nearest red cell instead
    #[test]
    fn test_targets_first_goal_candidate() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, CellState::Red);
        grid.set(0, 4, CellState::Red);
        grid.set(1, 0, CellState::Red);

        assert_eq!(
            find_endpoints(&grid),
            Some((AlgoPoint::new(0, 0), AlgoPoint::new(4, 0)))
        );

        let Ok(result) = AStarPathfinder.run(&grid, &RunOptions::default()) else {
            unreachable!("A* never fails hard");
        };
        assert_eq!(result.path().and_then(<[_]>::last), Some(&AlgoPoint::new(4, 0)));
    }

    // Tests the closed-set guard expands each cell at most once
    // Verified by removing the closed check before expansion
    #[test]
    fn test_each_cell_expanded_at_most_once() {
        let grid = walled_board();
        let passable = grid.area() - grid.count(CellState::Black);

        let (path, stats) =
            AStarPathfinder::search(&grid, AlgoPoint::new(0, 0), AlgoPoint::new(8, 8));

        assert!(path.is_some());
        assert!(stats.expanded <= passable);
    }

    // Tests the input grid is left untouched
    // Verified by marking visited cells on the input
    #[test]
    fn test_input_not_mutated() {
        let grid = walled_board();
        let snapshot = grid.clone();

        let _ = AStarPathfinder.run(&grid, &RunOptions::default());

        assert_eq!(grid, snapshot);
    }
}
