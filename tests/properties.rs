//! Property tests for collision, rotation and row clearing

use proptest::prelude::*;

use blockfall::core::{canonical_shape, collides, Grid, Piece, Shape};
use blockfall::types::{Color, PieceKind};

const COLS: usize = 10;
const ROWS: usize = 20;
const FILL: Option<Color> = Some(Color::new(0x445566));

fn grid_from(mask: &[bool]) -> Grid {
    let mut grid = Grid::standard();
    for (i, &filled) in mask.iter().enumerate() {
        if filled {
            grid.set((i % COLS) as i32, (i / COLS) as i32, FILL);
        }
    }
    grid
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (1usize..=4, 1usize..=4)
        .prop_flat_map(|(w, h)| proptest::collection::vec(proptest::collection::vec(any::<bool>(), w), h))
        .prop_filter_map("needs an occupied cell", |rows| Shape::from_rows(&rows).ok())
}

/// Brute-force reference for `collides`
fn oracle(piece: &Piece, mask: &[bool]) -> bool {
    piece.cells().any(|(x, y)| {
        x < 0 || x >= COLS as i32 || y >= ROWS as i32 || (y >= 0 && mask[y as usize * COLS + x as usize])
    })
}

proptest! {
    #[test]
    fn collides_matches_oracle(
        mask in proptest::collection::vec(prop::bool::weighted(0.3), COLS * ROWS),
        kind in kind_strategy(),
        turns in 0usize..4,
        x in -5i32..15,
        y in -5i32..25,
    ) {
        let grid = grid_from(&mask);
        let mut piece = Piece::spawn(kind, COLS);
        for _ in 0..turns {
            piece = piece.rotated();
        }
        piece.x = x;
        piece.y = y;

        prop_assert_eq!(collides(&piece, &grid), oracle(&piece, &mask));
    }

    #[test]
    fn four_turns_is_identity(shape in shape_strategy()) {
        let turned = shape.rotated();
        prop_assert_eq!(turned.width(), shape.height());
        prop_assert_eq!(turned.height(), shape.width());
        prop_assert_eq!(turned.cell_count(), shape.cell_count());
        prop_assert_eq!(turned.rotated().rotated().rotated(), shape);
    }

    #[test]
    fn canonical_four_turns_is_identity(kind in kind_strategy()) {
        let shape = canonical_shape(kind);
        prop_assert_eq!(shape.rotated().rotated().rotated().rotated(), shape);
    }

    #[test]
    fn clear_rows_keeps_survivor_order(
        full in proptest::collection::vec(any::<bool>(), ROWS),
        mask in proptest::collection::vec(any::<bool>(), COLS * ROWS),
        holes in proptest::collection::vec(0..COLS, ROWS),
    ) {
        // Rows flagged in `full` are completely filled; every other row gets
        // at least one hole.
        let mut mask = mask;
        for y in 0..ROWS {
            for x in 0..COLS {
                let i = y * COLS + x;
                if full[y] {
                    mask[i] = true;
                } else if x == holes[y] {
                    mask[i] = false;
                }
            }
        }
        let mut grid = grid_from(&mask);
        let before = grid.clone();

        let expected: Vec<usize> = (0..ROWS).filter(|&y| full[y]).collect();
        prop_assert_eq!(grid.find_full_rows(), expected.clone());

        let removed = grid.clear_rows(&expected);
        prop_assert_eq!(removed, expected.len());

        for y in 0..removed {
            prop_assert!(grid.row(y).iter().all(|c| c.is_none()));
        }
        let survivors: Vec<usize> = (0..ROWS).filter(|&y| !full[y]).collect();
        for (offset, &old_y) in survivors.iter().enumerate() {
            prop_assert_eq!(grid.row(removed + offset), before.row(old_y));
        }
    }
}
