use crate::puzzle::Puzzle;

/// Sum over all tiles of the grid distance between a tile's position and its
/// home cell. Tile `v` belongs at row `v / n`, column `v % n`; the blank does
/// not contribute. Zero exactly on the solved board, and never more than the
/// true number of remaining slides.
pub fn manhattan_distance(puzzle: &Puzzle) -> u32 {
    let n = puzzle.size();
    let mut distance = 0;

    for row in 0..n {
        for col in 0..n {
            if let Some(tile) = puzzle.get(row, col) {
                let target_row = tile as usize / n;
                let target_col = tile as usize % n;
                distance += row.abs_diff(target_row) as u32;
                distance += col.abs_diff(target_col) as u32;
            }
        }
    }

    distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_board_scores_zero() {
        for size in 1..=4 {
            assert_eq!(manhattan_distance(&Puzzle::new(size).unwrap()), 0);
        }
    }

    #[test]
    fn one_misplaced_tile_scores_its_distance() {
        // 2x2 board one slide from solved: tile 2 sits one column from home.
        let cells = vec![Some(0), Some(1), None, Some(2)];
        let puzzle = Puzzle::from_cells(2, cells).unwrap();
        assert_eq!(manhattan_distance(&puzzle), 1);
    }

    #[test]
    fn fully_reversed_board_scores_known_total() {
        // 3x3 with every tile in the diagonally opposite cell.
        let cells = vec![
            Some(7),
            Some(6),
            Some(5),
            Some(4),
            Some(3),
            Some(2),
            Some(1),
            Some(0),
            None,
        ];
        let puzzle = Puzzle::from_cells(3, cells).unwrap();
        // Corner tiles 0, 1, 6, 7 are each 3 steps out; edge tiles 2, 3, 4,
        // 5 are each 1 step out.
        assert_eq!(manhattan_distance(&puzzle), 4 * 3 + 4 * 1);
    }
}
