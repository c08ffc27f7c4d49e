use std::ops::Index;

use itertools::Itertools;
use log::warn;
use thiserror::Error;

use crate::facelet::{Color, CubeState, Face};

/// How often each colour occurs across all 54 facelets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorCount([usize; 7]);

impl ColorCount {
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        Color::ALL.into_iter().zip(self.0)
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl Index<Color> for ColorCount {
    type Output = usize;

    fn index(&self, index: Color) -> &Self::Output {
        &self.0[index as usize]
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("The cube is incomplete, {unknown} facelets have not been scanned")]
    Incomplete { unknown: usize },
    #[error("Every colour must appear exactly 9 times, but {}", fmt_counts(.0))]
    InvalidCounts(Vec<(Color, usize)>),
}

fn fmt_counts(counts: &[(Color, usize)]) -> String {
    counts
        .iter()
        .map(|(color, count)| format!("{color} appears {count} times"))
        .join(", ")
}

impl CubeState {
    pub fn is_complete(&self) -> bool {
        self.facelets().all(|(.., color)| color != Color::Unknown)
    }

    pub fn color_count(&self) -> ColorCount {
        let mut counts = ColorCount::default();

        for (.., color) in self.facelets() {
            counts.0[color as usize] += 1;
        }

        counts
    }

    /// The real colours that do not appear exactly nine times, with their
    /// counts. Empty for a valid cube.
    pub fn invalid_counts(&self) -> Vec<(Color, usize)> {
        let counts = self.color_count();

        Color::REAL
            .into_iter()
            .map(|color| (color, counts[color]))
            .filter(|&(_, count)| count != 9)
            .collect()
    }

    /// Whether each real colour appears exactly nine times. Offending colours
    /// are logged; use [`CubeState::invalid_counts`] to get them.
    pub fn is_valid(&self) -> bool {
        let invalid = self.invalid_counts();

        for (color, count) in &invalid {
            warn!("Invalid cube: {color} has {count} facelets (should be 9)");
        }

        invalid.is_empty()
    }

    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            self.face(face)
                .iter()
                .flatten()
                .all(|&color| color == face.solved_color())
        })
    }

    /// The precondition for handing the cube to a solver: fully scanned, and
    /// every colour present nine times.
    ///
    /// # Errors
    ///
    /// `StateError::Incomplete` takes priority over `StateError::InvalidCounts`.
    pub fn check_solvable(&self) -> Result<(), StateError> {
        let unknown = self.color_count()[Color::Unknown];
        if unknown > 0 {
            return Err(StateError::Incomplete { unknown });
        }

        let invalid = self.invalid_counts();
        if !invalid.is_empty() {
            return Err(StateError::InvalidCounts(invalid));
        }

        Ok(())
    }

    /// [`CubeState::is_solved`], but refusing to answer for a cube that
    /// couldn't be a real cube.
    ///
    /// # Errors
    ///
    /// See [`CubeState::check_solvable`].
    pub fn try_is_solved(&self) -> Result<bool, StateError> {
        self.check_solvable()?;
        Ok(self.is_solved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_cube() {
        let cube = CubeState::unknown();

        assert!(!cube.is_complete());
        assert_eq!(cube.color_count()[Color::Unknown], 54);
        assert_eq!(cube.check_solvable(), Err(StateError::Incomplete { unknown: 54 }));
        assert!(!cube.is_solved());
    }

    #[test]
    fn solved_cube() {
        let cube = CubeState::solved();

        assert!(cube.is_complete());
        assert!(cube.is_valid());
        assert!(cube.is_solved());
        assert_eq!(cube.try_is_solved(), Ok(true));
        assert_eq!(cube.color_count().total(), 54);
        assert!(Color::REAL.iter().all(|&color| cube.color_count()[color] == 9));
    }

    #[test]
    fn ten_white_eight_yellow() {
        let mut cube = CubeState::solved();
        cube.set_facelet(Face::Down, 1, 1, Color::White);

        assert!(cube.is_complete());
        assert!(!cube.is_valid());
        assert_eq!(
            cube.invalid_counts(),
            vec![(Color::White, 10), (Color::Yellow, 8)]
        );

        let err = cube.try_is_solved().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Every colour must appear exactly 9 times, but White appears 10 times, Yellow appears 8 times"
        );
    }

    #[test]
    fn partly_scanned() {
        let mut cube = CubeState::solved();
        cube.reset_face(Face::Back);
        cube.set_facelet(Face::Up, 0, 0, Color::Unknown);

        assert!(!cube.is_complete());
        assert_eq!(cube.check_solvable(), Err(StateError::Incomplete { unknown: 10 }));
    }
}
