//! Movement offset tables in `(d_row, d_col)` form.
//!
//! Row deltas are negative toward rank 8. The ray table lists the orthogonal
//! rays first so callers can tell rook-like from bishop-like rays by index.

pub type Direction = (i8, i8);

/// Up, left, down, right.
pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Up-left, up-right, down-left, down-right.
pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight compass rays: the four orthogonals followed by the four diagonals.
pub const RAY_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-1, -2),
    (-2, -1),
    (-1, 2),
    (-2, 1),
    (1, 2),
    (2, 1),
    (1, -2),
    (2, -1),
];

pub const KING_OFFSETS: [Direction; 8] = RAY_DIRECTIONS;

#[inline]
pub const fn is_orthogonal(direction: Direction) -> bool {
    direction.0 == 0 || direction.1 == 0
}

#[inline]
pub const fn reverse(direction: Direction) -> Direction {
    (-direction.0, -direction.1)
}
