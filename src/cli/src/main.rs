mod config;
mod render;

use std::{io, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use config::CliConfig;
use cube_core::{
    Color, CubeState, parse_moves, parse_sequence,
    capture::{TextCapture, scan_face},
    replay::Replay,
    scramble::Scrambler,
    scripted::ScriptedSolver,
    solver::{CommandSolver, Solution, SolveError, Solver, WIRE_FACE_ORDER},
};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, info, warn};
use owo_colors::OwoColorize;

/// Applies cube notation to a 54-facelet cube, and talks to solvers and
/// scanners about it
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to `cube.toml`
    /// in the user's config directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print nets as letters instead of coloured blocks
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence and print the resulting cube
    Apply {
        /// The moves, e.g. "R U' M2 mL". Every token must be a move.
        sequence: String,
        /// Start from this 54-letter facelet string instead of a solved cube
        #[arg(long, value_name = "FACELETS")]
        from: Option<String>,
        /// Pick the moves out of free text and skip everything else
        #[arg(long)]
        lenient: bool,
    },
    /// Print a random scramble
    Scramble {
        /// Seed the generator for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the scrambled cube
        #[arg(long)]
        show: bool,
    },
    /// Check a facelet string for colour counts and completeness
    Validate {
        /// 54 letters, faces in U L F R B D order; `?` marks an unknown
        /// facelet
        facelets: String,
    },
    /// Step through a move sequence
    Replay {
        /// The moves to step through. Read leniently.
        sequence: String,
        /// Start from this 54-letter facelet string instead of a solved cube
        #[arg(long, value_name = "FACELETS")]
        from: Option<String>,
        /// Only show this step instead of all of them
        #[arg(long)]
        step: Option<usize>,
    },
    /// Ask the configured solver for a solution
    Solve {
        /// 54 letters, faces in U L F R B D order
        facelets: String,
        /// Skip the external solver and play the scripted beginner's method
        #[arg(long)]
        scripted: bool,
        /// Print every intermediate state of the solution
        #[arg(long)]
        walk: bool,
    },
    /// Read the six faces from stdin, one line of nine colour letters per
    /// face, in U L F R B D order
    Scan {
        /// Samples to take per face, overriding the configuration
        #[arg(long)]
        samples: Option<usize>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;
    let printer = Printer { plain: cli.plain };

    match cli.command {
        Commands::Apply {
            sequence,
            from,
            lenient,
        } => {
            let mut cube = starting_cube(from.as_deref())?;
            let moves = if lenient {
                parse_moves(&sequence)
            } else {
                parse_sequence(&sequence)?
            };

            cube.apply_all(&moves);
            info!("Applied {} moves", moves.len());

            printer.net(&cube);
            println!("{}", describe(&cube));
        }
        Commands::Scramble { seed, show } => {
            let mut scrambler = match seed {
                Some(seed) => Scrambler::with_seed(seed)
                    .lengths(config.scramble.min_len, config.scramble.max_len),
                None => config.scrambler(),
            };
            let moves = scrambler.scramble();

            println!("{}", moves.iter().join(" "));

            if show {
                let mut cube = CubeState::solved();
                cube.apply_all(&moves);
                printer.net(&cube);
                println!("{}", cube.facelet_string()?);
            }
        }
        Commands::Validate { facelets } => {
            let cube = facelets.parse::<CubeState>()?;
            printer.net(&cube);

            cube.check_solvable()?;
            println!("{}", describe(&cube));
        }
        Commands::Replay {
            sequence,
            from,
            step,
        } => {
            let replay = Replay::from_text(starting_cube(from.as_deref())?, &sequence);

            match step {
                Some(step) => {
                    let state = replay.state_at(step)?;
                    print_step(&printer, &replay, step, &state);
                }
                None => {
                    for (step, state) in replay.states().enumerate() {
                        print_step(&printer, &replay, step, &state);
                    }
                }
            }
        }
        Commands::Solve {
            facelets,
            scripted,
            walk,
        } => {
            let cube = facelets.parse::<CubeState>()?;
            let solution = if scripted {
                ScriptedSolver.solve(&cube)?
            } else {
                solve_with_fallback(&config, &cube)?
            };

            print_solution(&solution);

            if walk {
                let replay = Replay::from_solution(cube, &solution);
                for (step, state) in replay.states().enumerate() {
                    print_step(&printer, &replay, step, &state);
                }
            }
        }
        Commands::Scan { samples } => {
            let samples = samples.unwrap_or(config.capture.samples).max(1);
            let mut source = TextCapture::new(io::stdin().lock());
            let mut cube = CubeState::unknown();

            for face in WIRE_FACE_ORDER {
                eprintln!("{} face ({samples} sample(s)):", face.name());
                scan_face(&mut cube, face, &mut source, samples)
                    .map_err(|e| eyre!("{e} while scanning the {} face", face.name()))?;
            }

            printer.net(&cube);
            println!("{}", describe(&cube));

            if cube.check_solvable().is_ok() {
                println!("{}", cube.facelet_string()?);
            }
        }
    }

    Ok(())
}

struct Printer {
    plain: bool,
}

impl Printer {
    fn net(&self, cube: &CubeState) {
        if self.plain {
            print!("{cube}");
        } else {
            print!("{}", render::colored_net(cube));
        }
    }
}

fn starting_cube(from: Option<&str>) -> color_eyre::Result<CubeState> {
    match from {
        Some(facelets) => Ok(facelets.parse::<CubeState>()?),
        None => Ok(CubeState::solved()),
    }
}

fn describe(cube: &CubeState) -> String {
    if !cube.is_complete() {
        let unknown = cube.color_count()[Color::Unknown];
        return format!("{} ({unknown} facelets unknown)", "Incomplete".yellow());
    }

    match cube.try_is_solved() {
        Ok(true) => "Solved".green().to_string(),
        Ok(false) => "Valid, not solved".to_string(),
        Err(e) => format!("{}: {e}", "Invalid".red()),
    }
}

fn solve_with_fallback(config: &CliConfig, cube: &CubeState) -> color_eyre::Result<Solution> {
    let mut solver = CommandSolver::new(config.solver.program.clone(), config.solver.args.clone());

    match solver.solve(cube) {
        Err(SolveError::Unavailable(program)) => {
            warn!("Solver `{program}` is not available, falling back to the scripted beginner's method");
            Ok(ScriptedSolver.solve(cube)?)
        }
        other => Ok(other?),
    }
}

fn print_solution(solution: &Solution) {
    if solution.phases.is_empty() {
        println!("{}", solution.moves.iter().join(" "));
        return;
    }

    for phase in &solution.phases {
        println!("{}: {}", phase.name.bold(), phase.moves.iter().join(" "));
    }
}

fn print_step(printer: &Printer, replay: &Replay, step: usize, state: &CubeState) {
    let next = match replay.phase_at(step) {
        Some((phase, mv)) => format!("next {mv} ({phase})"),
        None => match replay.move_at(step) {
            Some(mv) => format!("next {mv}"),
            None => "done".to_owned(),
        },
    };

    println!("{} of {}, {next}", format!("Step {step}").bold(), replay.len());
    printer.net(state);
}

