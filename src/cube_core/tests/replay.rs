use cube_core::{
    CubeState, Face, parse_sequence,
    replay::{Replay, ReplayError},
    scripted::ScriptedSolver,
    solver::{CommandSolver, Solution, SolveError, Solver},
};
use log::info;
use std::{sync::mpsc, thread, time::Duration};

#[test_log::test]
fn replay_endpoints() {
    let moves = parse_sequence("R U R' U' M2 mL E S'").unwrap();
    let replay = Replay::new(CubeState::solved(), moves.clone());

    assert_eq!(replay.state_at(0).unwrap(), CubeState::solved());

    let mut once = CubeState::solved();
    once.apply_all(&moves);
    assert_eq!(replay.state_at(replay.len()).unwrap(), once);

    // Going back and forth gives the same states every time.
    let forward = replay.state_at(5).unwrap();
    let _ = replay.state_at(2).unwrap();
    assert_eq!(replay.state_at(5).unwrap(), forward);

    assert_eq!(
        replay.state_at(9),
        Err(ReplayError::OutOfRange { step: 9, len: 8 })
    );
}

#[test_log::test]
fn states_match_state_at() {
    let replay = Replay::from_text(CubeState::solved(), "F2 L' D B, mR2 S");
    let states = replay.states().collect::<Vec<_>>();

    assert_eq!(states.len(), replay.len() + 1);
    for (step, state) in states.iter().enumerate() {
        assert_eq!(*state, replay.state_at(step).unwrap());
    }
}

#[test_log::test]
fn stepping_through_the_scripted_solution() {
    let mut cube = CubeState::solved();
    cube.apply_str("R U R' U'").unwrap();

    let solution = ScriptedSolver.solve(&cube).unwrap();
    let replay = Replay::from_solution(cube.clone(), &solution);

    assert_eq!(replay.phase_at(0).map(|(name, _)| name), Some("Yellow cross"));
    assert_eq!(
        replay.phase_at(replay.len() - 1).map(|(name, _)| name),
        Some("PLL Step 2")
    );
    assert_eq!(replay.phase_at(replay.len()), None);

    for (step, state) in replay.states().enumerate() {
        info!("Step {step}: valid = {}", state.is_valid());
        assert!(state.is_valid());
    }
}

#[test_log::test]
fn missing_solver_is_unavailable() {
    let mut solver = CommandSolver::new("./no-such-solver-here", Vec::new());
    let result = solver.solve(&CubeState::solved());

    assert!(matches!(result, Err(SolveError::Unavailable(_))));
}

#[test_log::test]
fn incomplete_cube_never_reaches_the_solver() {
    let mut cube = CubeState::solved();
    cube.reset_face(Face::Down);

    let mut solver = CommandSolver::new("./no-such-solver-here", Vec::new());
    assert!(matches!(solver.solve(&cube), Err(SolveError::State(_))));
}

#[cfg(unix)]
#[test_log::test]
fn talks_to_a_solver_process() {
    let script = "read facelets; \
        test ${#facelets} -eq 54 || exit 3; \
        echo 'Cross: F R`'; \
        echo 'Finish: U2'";

    let mut solver = CommandSolver::new("sh", vec!["-c".to_owned(), script.to_owned()]);
    let solution = solver.solve(&CubeState::solved()).unwrap();

    assert_eq!(solution.phases.len(), 2);
    assert_eq!(solution.moves, parse_sequence("F R' U2").unwrap());
    assert_eq!(solution.navigation_moves(), solution.moves);
}

#[cfg(unix)]
#[test_log::test]
fn solver_exit_code_is_a_failure() {
    let mut solver = CommandSolver::new(
        "sh",
        vec!["-c".to_owned(), "read x; echo nope >&2; exit 1".to_owned()],
    );

    match solver.solve(&CubeState::solved()) {
        Err(SolveError::Failed(message)) => assert!(message.contains("nope")),
        other => panic!("Expected a failure, got {other:?}"),
    }
}

#[cfg(unix)]
fn solve_within(solver: CommandSolver, limit: Duration) -> Result<Solution, SolveError> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut solver = solver;
        let _ = tx.send(solver.solve(&CubeState::solved()));
    });

    rx.recv_timeout(limit).expect("the solver call did not return")
}

#[cfg(unix)]
#[test_log::test]
fn noisy_stderr_does_not_block() {
    let script = "read facelets; head -c 200000 /dev/zero | tr '\\0' x >&2; echo R";
    let solver = CommandSolver::new("sh", vec!["-c".to_owned(), script.to_owned()]);

    let solution = solve_within(solver, Duration::from_secs(30)).unwrap();
    assert_eq!(solution.moves, parse_sequence("R").unwrap());
}

#[cfg(unix)]
#[test_log::test]
fn solver_that_never_reads_stdin() {
    for _ in 0..50 {
        let solver = CommandSolver::new("sh", vec!["-c".to_owned(), "exec 0<&-; echo R".to_owned()]);

        let solution = solve_within(solver, Duration::from_secs(30)).unwrap();
        assert_eq!(solution.moves, parse_sequence("R").unwrap());
    }
}
