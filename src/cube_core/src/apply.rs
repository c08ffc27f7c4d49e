use log::{debug, trace};

use crate::{
    facelet::{CubeState, Face},
    notation::{Move, ParseError, Selector, Turn, parse_sequence},
    reorient::reorient_quarter,
    rotation::{Direction, quarter_turn},
    slice::{expansion, middle_quarter},
};

/// How a turn breaks down into quarter turns. Half turns are always two
/// clockwise quarters.
fn quarters(turn: Turn) -> (Direction, usize) {
    match turn {
        Turn::Clockwise => (Direction::Clockwise, 1),
        Turn::CounterClockwise => (Direction::CounterClockwise, 1),
        Turn::Half => (Direction::Clockwise, 2),
    }
}

impl CubeState {
    fn turn_face(&mut self, face: Face, turn: Turn) {
        let (direction, count) = quarters(turn);

        for _ in 0..count {
            quarter_turn(&mut self.faces, face, direction);
        }
    }

    /// Apply one move in place.
    pub fn apply(&mut self, mv: Move) {
        trace!("Applying {mv}");

        let (direction, count) = quarters(mv.turn);

        match mv.selector {
            Selector::Face(face) => self.turn_face(face, mv.turn),
            Selector::Slice(slice) => match expansion(slice, mv.turn) {
                Some(outer_turns) => {
                    for (face, turn) in outer_turns {
                        self.turn_face(face, turn);
                    }
                }
                None => {
                    for _ in 0..count {
                        middle_quarter(&mut self.faces, direction);
                    }
                }
            },
            Selector::Reorient(reorient) => {
                // A counter-clockwise reorientation is the opposite one
                // turned clockwise.
                let reorient = match direction {
                    Direction::Clockwise => reorient,
                    Direction::CounterClockwise => reorient.opposite(),
                };

                for _ in 0..count {
                    reorient_quarter(&mut self.faces, reorient);
                }
            }
        }
    }

    pub fn apply_all<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        let mut count = 0;

        for mv in moves {
            self.apply(*mv);
            count += 1;
        }

        debug!("Applied {count} moves");
    }

    /// Parse a whitespace separated sequence and apply it. Nothing is applied
    /// if any token fails to parse.
    ///
    /// # Errors
    ///
    /// The first token that isn't a move.
    pub fn apply_str(&mut self, sequence: &str) -> Result<(), ParseError> {
        let moves = parse_sequence(sequence)?;
        self.apply_all(&moves);
        Ok(())
    }

    /// The state after `mv`, leaving `self` alone.
    #[must_use]
    pub fn moved(&self, mv: Move) -> CubeState {
        let mut out = self.clone();
        out.apply(mv);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facelet::Color;

    #[test]
    fn single_r_turn() {
        let mut cube = CubeState::solved();
        cube.apply_str("R").unwrap();

        // The right column of Up now shows what was on Front.
        for row in 0..3 {
            assert_eq!(cube[Face::Up][row][2], Color::Green);
            assert_eq!(cube[Face::Up][row][0], Color::White);
            assert_eq!(cube[Face::Front][row][2], Color::Yellow);
            assert_eq!(cube[Face::Back][row][0], Color::White);
            assert_eq!(cube[Face::Down][row][2], Color::Blue);
        }
        assert_eq!(cube[Face::Right], CubeState::solved()[Face::Right]);
        assert_eq!(cube[Face::Left], CubeState::solved()[Face::Left]);
    }

    #[test]
    fn failed_parse_applies_nothing() {
        let mut cube = CubeState::solved();
        assert!(cube.apply_str("R U X").is_err());
        assert_eq!(cube, CubeState::solved());
    }

    #[test]
    fn moved_leaves_original() {
        let cube = CubeState::solved();
        let turned = cube.moved("F".parse().unwrap());

        assert_eq!(cube, CubeState::solved());
        assert_ne!(turned, cube);
    }

    #[test]
    fn apply_all_takes_any_iterator() {
        let moves = parse_sequence("R U R' U' M2").unwrap();

        let mut from_slice = CubeState::solved();
        from_slice.apply_all(&moves);

        let mut from_iter = CubeState::solved();
        from_iter.apply_all(moves.iter().filter(|mv| mv.turn != Turn::Half));
        from_iter.apply("M2".parse().unwrap());

        assert_eq!(from_iter, from_slice);

        let mut untouched = CubeState::solved();
        untouched.apply_all(&Vec::<Move>::new());
        assert_eq!(untouched, CubeState::solved());
    }

    #[test]
    fn primed_reorientation_is_the_other_way() {
        let mut a = CubeState::solved();
        a.apply_str("R U mR'").unwrap();
        let mut b = CubeState::solved();
        b.apply_str("R U mL").unwrap();

        assert_eq!(a, b);
    }
}
