use log::info;

use crate::{
    facelet::CubeState,
    notation::{Move, parse_sequence},
    solver::{Phase, Solution, SolveError, Solver},
};

/// The beginner's method as a fixed script: the same seven algorithms every
/// time, whatever the cube looks like.
pub const BEGINNER_SCRIPT: [(&str, &str); 7] = [
    ("Yellow cross", "F R U R' U' F'"),
    ("Yellow corners", "R U R' U'"),
    ("Second layer", "U R U' R' U' F' U F"),
    ("OLL Step 1", "F R U R' U' F'"),
    ("OLL Step 2", "R U R' U R U2 R'"),
    ("PLL Step 1", "R U R' F' R U R' U' R' F R2 U' R'"),
    ("PLL Step 2", "M2 U M2 U2 M2 U M2"),
];

/// Plays back [`BEGINNER_SCRIPT`]. It does not look at the cube beyond
/// checking that it could be a real one, so it only solves the cube by
/// accident. Useful as a stand-in when no real solver is installed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSolver;

impl ScriptedSolver {
    pub fn phases() -> Vec<Phase> {
        BEGINNER_SCRIPT
            .iter()
            .map(|(name, moves)| Phase {
                name: (*name).to_owned(),
                moves: parse_sequence(moves).expect("BEGINNER_SCRIPT parses"),
            })
            .collect()
    }
}

impl Solver for ScriptedSolver {
    fn solve(&mut self, state: &CubeState) -> Result<Solution, SolveError> {
        state.check_solvable()?;

        let phases = ScriptedSolver::phases();
        let moves = phases
            .iter()
            .flat_map(|phase| phase.moves.iter().copied())
            .collect::<Vec<Move>>();

        info!("Playing back the scripted beginner's method, {} moves", moves.len());

        Ok(Solution { moves, phases })
    }
}
