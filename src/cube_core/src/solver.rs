//! The boundary with external solvers: the 54 character facelet string they
//! read, the phase-annotated solutions they return, and a solver that talks to
//! an external program over stdin/stdout.

use std::{
    io::{self, Write},
    path::PathBuf,
    process::{Command, Stdio},
    str::FromStr,
    time::Instant,
};

use itertools::Itertools;
use log::{debug, info};
use thiserror::Error;

use crate::{
    facelet::{Color, CubeState, Face},
    notation::{Move, ParseError, parse_sequence},
    validation::StateError,
};

/// Face order of the facelet string.
pub const WIRE_FACE_ORDER: [Face; 6] = [
    Face::Up,
    Face::Left,
    Face::Front,
    Face::Right,
    Face::Back,
    Face::Down,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletStringError {
    #[error("A facelet string has 54 characters, got {0}")]
    WrongLength(usize),
    #[error("Unknown colour letter `{letter}` at index {index}")]
    BadLetter { index: usize, letter: char },
}

impl CubeState {
    /// Encode the cube for a solver: faces in `WIRE_FACE_ORDER`, each row-major,
    /// one of `wyrobg` per facelet.
    ///
    /// # Errors
    ///
    /// If any facelet is still unknown.
    pub fn facelet_string(&self) -> Result<String, StateError> {
        WIRE_FACE_ORDER
            .iter()
            .flat_map(|&face| self.face(face).iter().flatten())
            .map(|color| color.letter())
            .collect::<Option<String>>()
            .ok_or_else(|| StateError::Incomplete {
                unknown: self.color_count()[Color::Unknown],
            })
    }

    /// Decode a facelet string produced by [`CubeState::facelet_string`]. A
    /// `?` is read as an unknown facelet, so partly scanned cubes can be
    /// written down too.
    ///
    /// # Errors
    ///
    /// If the string is not 54 characters long or contains a character that
    /// isn't a colour letter.
    pub fn from_facelet_string(s: &str) -> Result<CubeState, FaceletStringError> {
        let letters = s.chars().collect_vec();
        if letters.len() != 54 {
            return Err(FaceletStringError::WrongLength(letters.len()));
        }

        let mut cube = CubeState::unknown();

        for (face_idx, chunk) in letters.chunks_exact(9).enumerate() {
            let face = WIRE_FACE_ORDER[face_idx];

            for (i, &letter) in chunk.iter().enumerate() {
                let index = face_idx * 9 + i;
                let color = match letter {
                    '?' => Color::Unknown,
                    letter => Color::from_letter(letter)
                        .ok_or(FaceletStringError::BadLetter { index, letter })?,
                };
                cube.set_facelet(face, i / 3, i % 3, color);
            }
        }

        Ok(cube)
    }
}

impl FromStr for CubeState {
    type Err = FaceletStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CubeState::from_facelet_string(s)
    }
}

/// A named stretch of a solution, e.g. "Second layer".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub name: String,
    pub moves: Vec<Move>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    /// The solution as the solver reported it in one piece. May be an
    /// optimised join of the phases.
    pub moves: Vec<Move>,
    pub phases: Vec<Phase>,
}

impl Solution {
    /// The moves to step through: the phases back to back when there are any,
    /// the flat move list otherwise.
    pub fn navigation_moves(&self) -> Vec<Move> {
        if self.phases.is_empty() {
            self.moves.clone()
        } else {
            self.phases.iter().flat_map(|phase| phase.moves.iter().copied()).collect()
        }
    }
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("The cube cannot be solved in this state: {0}")]
    State(#[from] StateError),
    #[error("Solver `{0}` is not available")]
    Unavailable(String),
    #[error("Solver failed: {0}")]
    Failed(String),
    #[error("Solver returned an invalid move: {0}")]
    Parse(#[from] ParseError),
    #[error("Could not talk to the solver: {0}")]
    Io(#[from] io::Error),
}

pub trait Solver {
    /// Find a solution for `state`. One blocking request; no partial results.
    ///
    /// # Errors
    ///
    /// `SolveError::Unavailable` if the solver isn't there at all, and the
    /// other variants for a solver that is there but couldn't deliver.
    fn solve(&mut self, state: &CubeState) -> Result<Solution, SolveError>;
}

/// Solver output uses a backtick for prime now and then.
fn normalize_primes(text: &str) -> String {
    text.replace('`', "'")
}

/// Read a solver's stdout. `Name: moves` lines are phases, any other
/// non-empty line is more of the flat solution.
///
/// # Errors
///
/// If a line holds something other than moves.
pub fn parse_solver_output(output: &str) -> Result<Solution, ParseError> {
    let mut solution = Solution::default();

    for line in output.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let line = normalize_primes(line);

        match line.split_once(':') {
            Some((name, moves)) => solution.phases.push(Phase {
                name: name.trim().to_owned(),
                moves: parse_sequence(moves)?,
            }),
            None => solution.moves.extend(parse_sequence(&line)?),
        }
    }

    if solution.moves.is_empty() {
        solution.moves = solution.navigation_moves();
    }

    Ok(solution)
}

/// A solver living in another program. The facelet string and a newline go to
/// its stdin and the solution is read from its stdout once it exits.
#[derive(Debug, Clone)]
pub struct CommandSolver {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandSolver {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> CommandSolver {
        CommandSolver {
            program: program.into(),
            args,
        }
    }
}

impl Solver for CommandSolver {
    fn solve(&mut self, state: &CubeState) -> Result<Solution, SolveError> {
        state.check_solvable()?;
        let facelets = state.facelet_string()?;

        info!("Sending {facelets} to {}", self.program.display());
        let started = Instant::now();

        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SolveError::Unavailable(self.program.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(mut stdin) = child.stdin.take() {
            match writeln!(stdin, "{facelets}") {
                Ok(()) => {}
                // The solver may exit or close stdin without reading; its exit
                // status and stdout still decide the result.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    debug!("Solver closed its stdin early: {e}");
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e.into());
                }
            }
        }

        // Drains stdout and stderr together so a chatty stderr can't block.
        let output = child.wait_with_output()?;
        info!("Solver answered in {:?}", started.elapsed());

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(SolveError::Failed(format!("{}: {}", output.status, stderr.trim())));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("Solver replied:\n{stdout}");

        let solution = parse_solver_output(&stdout)?;
        info!(
            "Received {} moves in {} phases",
            solution.navigation_moves().len(),
            solution.phases.len()
        );

        Ok(solution)
    }
}
