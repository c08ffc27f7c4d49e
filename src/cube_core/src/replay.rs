use thiserror::Error;

use crate::{
    facelet::CubeState,
    notation::{Move, parse_moves},
    solver::{Phase, Solution},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Step {step} is out of range, available steps are 0-{len}")]
    OutOfRange { step: usize, len: usize },
}

/// Steps back and forth through a fixed move list by replaying it from a
/// saved starting state.
#[derive(Debug, Clone)]
pub struct Replay {
    initial: CubeState,
    moves: Vec<Move>,
    phases: Vec<Phase>,
}

impl Replay {
    pub fn new(initial: CubeState, moves: Vec<Move>) -> Replay {
        Replay {
            initial,
            moves,
            phases: Vec::new(),
        }
    }

    /// Replay manually entered text, taking whatever moves can be found in it.
    pub fn from_text(initial: CubeState, text: &str) -> Replay {
        Replay::new(initial, parse_moves(text))
    }

    /// Replay a solver's answer phase by phase.
    pub fn from_solution(initial: CubeState, solution: &Solution) -> Replay {
        Replay {
            initial,
            moves: solution.navigation_moves(),
            phases: solution.phases.clone(),
        }
    }

    pub fn initial(&self) -> &CubeState {
        &self.initial
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    fn check_step(&self, step: usize) -> Result<(), ReplayError> {
        if step > self.moves.len() {
            return Err(ReplayError::OutOfRange {
                step,
                len: self.moves.len(),
            });
        }

        Ok(())
    }

    /// The state after the first `step` moves. `0` is the initial state and
    /// `len()` is the state after every move.
    ///
    /// # Errors
    ///
    /// If `step > len()`.
    pub fn state_at(&self, step: usize) -> Result<CubeState, ReplayError> {
        self.check_step(step)?;

        let mut state = self.initial.clone();
        state.apply_all(&self.moves[..step]);
        Ok(state)
    }

    /// The move taking step `step` to step `step + 1`, if there is one.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        self.moves.get(step).copied()
    }

    /// The phase that the move at `step` belongs to, together with that move.
    /// `None` past the last move or when the moves were not split into phases.
    pub fn phase_at(&self, step: usize) -> Option<(&str, Move)> {
        let mut start = 0;

        for phase in &self.phases {
            if step < start + phase.moves.len() {
                return Some((&phase.name, phase.moves[step - start]));
            }
            start += phase.moves.len();
        }

        None
    }

    /// Every state from the initial one up to the final one, `len() + 1` in
    /// all, each built from the previous one.
    pub fn states(&self) -> impl Iterator<Item = CubeState> + '_ {
        let mut current = Some(self.initial.clone());
        let mut moves = self.moves.iter();

        std::iter::from_fn(move || {
            let out = current.take()?;
            if let Some(mv) = moves.next() {
                current = Some(out.moved(*mv));
            }
            Some(out)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_sequence;

    #[test]
    fn phases_line_up_with_steps() {
        let solution = Solution {
            moves: vec![],
            phases: vec![
                Phase {
                    name: "First".to_owned(),
                    moves: parse_sequence("R U").unwrap(),
                },
                Phase {
                    name: "Empty".to_owned(),
                    moves: vec![],
                },
                Phase {
                    name: "Second".to_owned(),
                    moves: parse_sequence("F'").unwrap(),
                },
            ],
        };
        let replay = Replay::from_solution(CubeState::solved(), &solution);

        assert_eq!(replay.len(), 3);
        assert_eq!(replay.phase_at(0).map(|(name, mv)| (name, mv.to_string())), Some(("First", "R".to_owned())));
        assert_eq!(replay.phase_at(1).map(|(name, _)| name), Some("First"));
        assert_eq!(replay.phase_at(2).map(|(name, mv)| (name, mv.to_string())), Some(("Second", "F'".to_owned())));
        assert_eq!(replay.phase_at(3), None);
        assert_eq!(replay.move_at(2), parse_sequence("F'").unwrap().first().copied());
        assert_eq!(replay.move_at(3), None);
    }

    #[test]
    fn states_iterator_matches_state_at() {
        let replay = Replay::from_text(CubeState::solved(), "R U R' U' M2 E S' mL");
        let states = replay.states().collect::<Vec<_>>();

        assert_eq!(states.len(), replay.len() + 1);
        for (step, state) in states.iter().enumerate() {
            assert_eq!(*state, replay.state_at(step).unwrap());
        }
    }

    #[test]
    fn out_of_range() {
        let replay = Replay::from_text(CubeState::solved(), "R U");

        assert!(replay.state_at(2).is_ok());
        assert_eq!(
            replay.state_at(3),
            Err(ReplayError::OutOfRange { step: 3, len: 2 })
        );
    }
}
