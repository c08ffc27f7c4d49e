use crate::{
    facelet::{Face, FaceGrid},
    notation::Reorient,
    rotation::{Direction, rotate_grid},
};

/// Pick the whole cube up and give it a quarter turn about the vertical axis.
///
/// `mL` hands each side face the grid of its right-hand neighbour (Front ←
/// Right ← Back ← Left ← Front) and turns Up clockwise and Down
/// counter-clockwise. `mR` is its exact inverse. The side grids are moved
/// whole, never rotated.
pub(crate) fn reorient_quarter(faces: &mut [FaceGrid; 6], reorient: Reorient) {
    let [front, right, back, left] =
        [Face::Front, Face::Right, Face::Back, Face::Left].map(|face| faces[face as usize]);

    let (sides, up, down) = match reorient {
        Reorient::Left => (
            [right, back, left, front],
            Direction::Clockwise,
            Direction::CounterClockwise,
        ),
        Reorient::Right => (
            [left, front, right, back],
            Direction::CounterClockwise,
            Direction::Clockwise,
        ),
    };

    for (face, grid) in [Face::Front, Face::Right, Face::Back, Face::Left].into_iter().zip(sides) {
        faces[face as usize] = grid;
    }

    faces[Face::Up as usize] = rotate_grid(&faces[Face::Up as usize], up);
    faces[Face::Down as usize] = rotate_grid(&faces[Face::Down as usize], down);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facelet::{Color, CubeState};

    #[test]
    fn left_relabels_sides() {
        let mut cube = CubeState::solved();
        reorient_quarter(&mut cube.faces, Reorient::Left);

        assert_eq!(cube[Face::Front][0][0], Color::Red);
        assert_eq!(cube[Face::Right][0][0], Color::Blue);
        assert_eq!(cube[Face::Back][0][0], Color::Orange);
        assert_eq!(cube[Face::Left][0][0], Color::Green);
    }

    #[test]
    fn right_undoes_left() {
        let mut cube = CubeState::solved();
        cube.set_facelet(Face::Up, 0, 0, Color::Red);
        cube.set_facelet(Face::Down, 2, 1, Color::Green);
        cube.set_facelet(Face::Front, 1, 2, Color::Yellow);
        let before = cube.clone();

        reorient_quarter(&mut cube.faces, Reorient::Left);
        assert_ne!(cube, before);
        // Up turned clockwise, so its corner moved from the top left to the
        // top right.
        assert_eq!(cube[Face::Up][0][2], Color::Red);

        reorient_quarter(&mut cube.faces, Reorient::Right);
        assert_eq!(cube, before);
    }
}
