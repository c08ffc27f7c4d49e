//! Slice moves. `M` cycles the middle rows of the four side faces directly.
//! `E` and `S` are not given cycles of their own and expand into a pair of
//! outer face turns instead.
//!
//! That expansion also turns the outer grids (D/U for `E`, F/B for `S`), so
//! `E` and `S` are not pure slice permutations. Replayed solver scripts
//! depend on exactly this behaviour.

use crate::{
    facelet::{Face, FaceGrid},
    notation::{Slice, Turn},
    rotation::{Direction, StripCycle, Sticker, cycle_strips},
};

const fn middle_row(face: Face) -> [Sticker; 3] {
    [
        Sticker { face, row: 1, col: 0 },
        Sticker { face, row: 1, col: 1 },
        Sticker { face, row: 1, col: 2 },
    ]
}

/// Clockwise `M`: Front ← Right ← Back ← Left ← Front.
pub(crate) const MIDDLE_ROW_CYCLE: StripCycle = [
    middle_row(Face::Front),
    middle_row(Face::Right),
    middle_row(Face::Back),
    middle_row(Face::Left),
];

pub(crate) fn middle_quarter(faces: &mut [FaceGrid; 6], direction: Direction) {
    cycle_strips(faces, &MIDDLE_ROW_CYCLE, direction);
}

/// The outer turns `E` and `S` stand for, in application order.
pub(crate) const fn expansion(slice: Slice, turn: Turn) -> Option<[(Face, Turn); 2]> {
    use Face::*;
    use Turn::*;

    let pair = match (slice, turn) {
        (Slice::M, _) => return None,
        (Slice::E, Clockwise) => [(Down, Clockwise), (Up, CounterClockwise)],
        (Slice::E, CounterClockwise) => [(Down, CounterClockwise), (Up, Clockwise)],
        (Slice::E, Half) => [(Down, Half), (Up, Half)],
        (Slice::S, Clockwise) => [(Front, Clockwise), (Back, CounterClockwise)],
        (Slice::S, CounterClockwise) => [(Front, CounterClockwise), (Back, Clockwise)],
        (Slice::S, Half) => [(Front, Half), (Back, Half)],
    };

    Some(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{facelet::CubeState, notation::Move};

    #[test]
    fn middle_rows_only() {
        let mut cube = CubeState::solved();
        middle_quarter(&mut cube.faces, Direction::Clockwise);

        assert_eq!(cube[Face::Front][1], CubeState::solved()[Face::Right][1]);
        assert_eq!(cube[Face::Left][1], CubeState::solved()[Face::Front][1]);
        assert_eq!(cube[Face::Front][0], CubeState::solved()[Face::Front][0]);
        assert_eq!(cube[Face::Up], CubeState::solved()[Face::Up]);
        assert_eq!(cube[Face::Down], CubeState::solved()[Face::Down]);
    }

    #[test]
    fn expansions() {
        assert_eq!(expansion(Slice::M, Turn::Clockwise), None);

        let show = |slice, turn| {
            expansion(slice, turn)
                .unwrap()
                .map(|(face, turn)| Move::face(face, turn).to_string())
                .join(" ")
        };

        assert_eq!(show(Slice::E, Turn::Clockwise), "D U'");
        assert_eq!(show(Slice::E, Turn::CounterClockwise), "D' U");
        assert_eq!(show(Slice::E, Turn::Half), "D2 U2");
        assert_eq!(show(Slice::S, Turn::Clockwise), "F B'");
        assert_eq!(show(Slice::S, Turn::CounterClockwise), "F' B");
        assert_eq!(show(Slice::S, Turn::Half), "F2 B2");
    }
}
