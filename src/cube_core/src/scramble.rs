use crate::{
    facelet::Face,
    notation::{Move, Turn},
};

/// Random outer-face scrambles that never turn the same face twice in a row.
#[derive(Debug, Clone)]
pub struct Scrambler {
    rng: fastrand::Rng,
    min_len: usize,
    max_len: usize,
}

impl Scrambler {
    pub const DEFAULT_MIN_LEN: usize = 15;
    pub const DEFAULT_MAX_LEN: usize = 20;

    pub fn new() -> Scrambler {
        Scrambler::from_rng(fastrand::Rng::new())
    }

    /// A scrambler that produces the same scrambles every run.
    pub fn with_seed(seed: u64) -> Scrambler {
        Scrambler::from_rng(fastrand::Rng::with_seed(seed))
    }

    fn from_rng(rng: fastrand::Rng) -> Scrambler {
        Scrambler {
            rng,
            min_len: Scrambler::DEFAULT_MIN_LEN,
            max_len: Scrambler::DEFAULT_MAX_LEN,
        }
    }

    /// Set the inclusive range of scramble lengths. The bounds are swapped if
    /// given the wrong way round.
    #[must_use]
    pub fn lengths(mut self, min_len: usize, max_len: usize) -> Scrambler {
        self.min_len = min_len.min(max_len);
        self.max_len = min_len.max(max_len);
        self
    }

    pub fn scramble(&mut self) -> Vec<Move> {
        let len = self.rng.usize(self.min_len..=self.max_len);
        let mut moves = Vec::with_capacity(len);
        let mut last_face = None;

        for _ in 0..len {
            let face = loop {
                let face = Face::ALL[self.rng.usize(..Face::ALL.len())];
                if Some(face) != last_face {
                    break face;
                }
            };
            let turn = Turn::ALL[self.rng.usize(..Turn::ALL.len())];

            moves.push(Move::face(face, turn));
            last_face = Some(face);
        }

        moves
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Scrambler::new()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::notation::Selector;

    #[test]
    fn lengths_and_no_repeats() {
        let mut scrambler = Scrambler::with_seed(7);

        for _ in 0..100 {
            let moves = scrambler.scramble();
            assert!((15..=20).contains(&moves.len()));
            assert!(moves.iter().all(|mv| matches!(mv.selector, Selector::Face(_))));
            assert!(moves.iter().tuple_windows().all(|(a, b)| a.selector != b.selector));
        }
    }

    #[test]
    fn seeded_is_deterministic() {
        let a = Scrambler::with_seed(42).lengths(3, 3).scramble();
        let b = Scrambler::with_seed(42).lengths(3, 3).scramble();

        assert_eq!(a, b);
        assert_eq!(a.len(), 3);

        let swapped = Scrambler::with_seed(1).lengths(9, 4).scramble();
        assert!((4..=9).contains(&swapped.len()));
    }
}
