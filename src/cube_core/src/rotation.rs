//! Face turns: rotating the turning face's own grid and cycling the twelve
//! facelets that border it on the four neighbouring faces.

use crate::facelet::{Face, FaceGrid};

/// The sense of a single quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Clockwise,
    CounterClockwise,
}

/// A facelet coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sticker {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

/// Three facelets on one face that travel together in a cycle.
pub(crate) type Strip = [Sticker; 3];

/// Four strips in cycle order. On a clockwise quarter turn strip `k` receives
/// the old contents of strip `k + 1`; counter-clockwise runs the other way.
pub(crate) type StripCycle = [Strip; 4];

/// Which line of a face a strip runs along, and in which direction.
#[derive(Clone, Copy)]
enum Line {
    Row(usize),
    RowReversed(usize),
    Col(usize),
    ColReversed(usize),
}

const fn strip(face: Face, line: Line) -> Strip {
    let mut out = [Sticker { face, row: 0, col: 0 }; 3];

    let mut i = 0;
    while i < 3 {
        let (row, col) = match line {
            Line::Row(r) => (r, i),
            Line::RowReversed(r) => (r, 2 - i),
            Line::Col(c) => (i, c),
            Line::ColReversed(c) => (2 - i, c),
        };
        out[i] = Sticker { face, row, col };
        i += 1;
    }

    out
}

/// The adjacent-facelet cycle of every face's clockwise turn, indexed by
/// `Face as usize`.
#[rustfmt::skip]
pub(crate) const ADJACENT_CYCLES: [StripCycle; 6] = {
    use Face::*;
    use Line::*;

    let cycles = [
        (Up, [
            strip(Front, Row(0)), strip(Right, Row(0)), strip(Back, Row(0)), strip(Left, Row(0)),
        ]),
        (Down, [
            strip(Front, Row(2)), strip(Left, Row(2)), strip(Back, Row(2)), strip(Right, Row(2)),
        ]),
        (Front, [
            strip(Up, Row(2)), strip(Left, ColReversed(2)), strip(Down, RowReversed(0)), strip(Right, Col(0)),
        ]),
        (Back, [
            strip(Up, Row(0)), strip(Right, Col(2)), strip(Down, RowReversed(2)), strip(Left, ColReversed(0)),
        ]),
        (Left, [
            strip(Up, Col(0)), strip(Back, ColReversed(2)), strip(Down, Col(0)), strip(Front, Col(0)),
        ]),
        (Right, [
            strip(Up, Col(2)), strip(Front, Col(2)), strip(Down, Col(2)), strip(Back, ColReversed(0)),
        ]),
    ];

    let mut out = [cycles[0].1; 6];
    let mut i = 0;
    while i < cycles.len() {
        assert!(cycles[i].0 as usize == i);
        out[i] = cycles[i].1;
        i += 1;
    }

    out
};

/// Rotate a 3×3 grid a quarter turn: clockwise sends `grid[r][c]` to
/// `[c][2 - r]`.
pub(crate) fn rotate_grid(grid: &FaceGrid, direction: Direction) -> FaceGrid {
    let mut out = *grid;

    for (r, row) in grid.iter().enumerate() {
        for (c, &color) in row.iter().enumerate() {
            match direction {
                Direction::Clockwise => out[c][2 - r] = color,
                Direction::CounterClockwise => out[2 - c][r] = color,
            }
        }
    }

    out
}

/// Move the contents of a strip cycle along by one strip.
pub(crate) fn cycle_strips(faces: &mut [FaceGrid; 6], cycle: &StripCycle, direction: Direction) {
    let before = cycle.map(|strip| {
        strip.map(|Sticker { face, row, col }| faces[face as usize][row][col])
    });

    for (k, strip) in cycle.iter().enumerate() {
        let source = match direction {
            Direction::Clockwise => (k + 1) % 4,
            Direction::CounterClockwise => (k + 3) % 4,
        };

        for (sticker, color) in strip.iter().zip(before[source]) {
            faces[sticker.face as usize][sticker.row][sticker.col] = color;
        }
    }
}

/// One quarter turn of an outer face.
pub(crate) fn quarter_turn(faces: &mut [FaceGrid; 6], face: Face, direction: Direction) {
    faces[face as usize] = rotate_grid(&faces[face as usize], direction);
    cycle_strips(faces, &ADJACENT_CYCLES[face as usize], direction);
}
