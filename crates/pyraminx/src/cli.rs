use std::path::PathBuf;

use eyre::{Context, Result, eyre};
use itertools::Itertools;
use pyraminx_core::scramble::{DEFAULT_SCRAMBLE_LENGTH, ScrambleParams};
use pyraminx_core::solver::solved_facelet_count;
use pyraminx_core::{
    FACELET_COUNT, Facelet, MoveChooser, PermutationTables, PreviewSolver, PyraminxState,
    RandomSolver, SECTION_COUNT, ScheduledTwist, SolveOutcome, StateSnapshot, Twist, TwistQueue,
};
use pyraminx_notation::{format_twists, parse_twists};
use pyraminx_prefs::{KeyPress, Preferences};
use serde::Serialize;

use crate::net;

/// Pyraminx command-line simulator
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,

    /// Preferences file to use instead of the one in the config directory.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Print facelets as color names instead of colored triangles.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the state of the puzzle after applying some moves.
    Show {
        /// Moves to apply to a solved puzzle, such as `L R' u`.
        moves: Vec<String>,

        /// Print the state as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate a random scramble.
    Scramble {
        /// Number of scramble twists.
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: u32,
        /// Seed for the scramble. If omitted, a random seed is used.
        #[arg(short, long)]
        seed: Option<String>,

        /// Print the scramble as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Scramble a puzzle and run the automatic solver on it, then print the
    /// outcome as JSON.
    Solve {
        /// Scramble moves to start from.
        #[arg(long, conflicts_with_all = ["seed", "length"])]
        scramble: Option<String>,
        /// Seed for a generated scramble.
        #[arg(short, long)]
        seed: Option<String>,
        /// Number of twists in a generated scramble.
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: u32,

        /// Maximum number of solver twists.
        #[arg(long, default_value_t = 1000)]
        max_steps: usize,
        /// Seed for the solver's random choices.
        #[arg(long)]
        rng_seed: Option<u64>,
        /// Prefer twists that make faces more uniform.
        #[arg(long)]
        preview: bool,
        /// Print the puzzle after every solver twist, waiting between twists.
        #[arg(long)]
        watch: bool,
    },
    /// Simulate key presses, such as `l`, `alt+r`, or `shift+w`.
    Keys {
        /// Key presses, in order.
        #[arg(required = true)]
        keys: Vec<String>,

        /// Print the final state as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Validate the permutation tables.
    Check,
    /// Print the effective preferences as YAML.
    Prefs {
        /// Print the path of the preferences file instead.
        #[arg(long)]
        path: bool,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let Args {
        subcommand,
        prefs: prefs_file,
        no_color,
    } = args;

    match subcommand {
        Subcommand::Show { moves, json } => {
            let twists = parse_move_args(&moves)?;
            let mut state = PyraminxState::new();
            state.apply_twists(twists);
            if json {
                write_json_output(&state.snapshot())
            } else {
                let prefs = Preferences::load(prefs_file.as_deref());
                print!("{}", net::render(&state, &prefs, !no_color));
                Ok(())
            }
        }

        Subcommand::Scramble { length, seed, json } => {
            let params = scramble_params(length, seed);
            let scrambled = PyraminxState::new_scrambled(params);
            if json {
                write_json_output(&ScrambleOutput {
                    params: scrambled.params,
                    scramble: format_twists(&scrambled.twists),
                    state: scrambled.state.snapshot(),
                })
            } else {
                let prefs = Preferences::load(prefs_file.as_deref());
                println!("{}", format_twists(&scrambled.twists));
                print!("{}", net::render(&scrambled.state, &prefs, !no_color));
                Ok(())
            }
        }

        Subcommand::Solve {
            scramble,
            seed,
            length,
            max_steps,
            rng_seed,
            preview,
            watch,
        } => {
            let scramble_twists = match scramble {
                Some(s) => parse_twists(&s).wrap_err("error parsing scramble")?,
                None => scramble_params(length, seed).twists(),
            };
            let mut state = PyraminxState::new();
            state.apply_twists(scramble_twists.iter().copied());

            let mut chooser: Box<dyn MoveChooser> = match (preview, rng_seed) {
                (false, None) => Box::new(RandomSolver::new()),
                (false, Some(seed)) => Box::new(RandomSolver::with_seed(seed)),
                (true, None) => Box::new(PreviewSolver::new()),
                (true, Some(seed)) => Box::new(PreviewSolver::with_seed(seed)),
            };

            let prefs = Preferences::load(prefs_file.as_deref());
            let twists = if watch {
                watch_solve(&mut *chooser, &mut state, max_steps, &prefs, !no_color)
            } else {
                chooser.solve(&mut state, max_steps).twists
            };

            write_json_output(&SolveOutput {
                scramble: format_twists(&scramble_twists),
                solved: state.is_solved(),
                twist_count: twists.len(),
                twists: format_twists(&twists),
                solved_facelets: solved_facelet_count(&state),
            })
        }

        Subcommand::Keys { keys, json } => {
            let prefs = Preferences::load(prefs_file.as_deref());
            let session = run_key_presses(&prefs, &keys)?;

            if json {
                write_json_output(&session.state.snapshot())
            } else {
                for scheduled in &session.scheduled {
                    println!("{} ({} ms)", scheduled.twist, scheduled.duration.as_millis());
                }
                if let Some(outcome) = &session.auto_solve {
                    println!(
                        "auto-solve ({}): {}",
                        if outcome.solved { "solved" } else { "gave up" },
                        format_twists(&outcome.twists),
                    );
                }
                print!("{}", net::render(&session.state, &prefs, !no_color));
                Ok(())
            }
        }

        Subcommand::Check => {
            let tables = PermutationTables::build().wrap_err("invalid permutation tables")?;
            let shared = PermutationTables::shared();
            if *shared != tables {
                return Err(eyre!("shared permutation tables differ from freshly built ones"));
            }
            let moved_counts = Twist::iter_all()
                .map(|twist| {
                    let moved = Facelet::iter()
                        .filter(|&f| tables.source(twist, f) != f)
                        .count();
                    format!("{twist}:{moved}")
                })
                .join(" ");
            println!("{}", pyraminx_core::ENGINE_VERSION_STRING);
            println!(
                "{} tables over {FACELET_COUNT} facelets are valid",
                SECTION_COUNT * 2,
            );
            println!("facelets moved per twist: {moved_counts}");
            Ok(())
        }

        Subcommand::Prefs { path } => {
            if path {
                match &prefs_file {
                    Some(p) => println!("{}", p.display()),
                    None => println!("{}", pyraminx_prefs::paths::prefs_file()?.display()),
                }
            } else {
                let prefs = Preferences::load(prefs_file.as_deref());
                print!("{}", prefs.to_yaml()?);
            }
            Ok(())
        }
    }
}

#[derive(Serialize, Debug)]
struct ScrambleOutput {
    params: ScrambleParams,
    scramble: String,
    state: StateSnapshot,
}

#[derive(Serialize, Debug)]
struct SolveOutput {
    scramble: String,
    solved: bool,
    twist_count: usize,
    twists: String,
    solved_facelets: usize,
}

/// Maximum number of twists for the automatic solver after key presses.
const AUTO_SOLVE_MAX_STEPS: usize = 1000;

/// Result of feeding key presses through the keybinds and the twist queue.
#[derive(Debug)]
struct KeySession {
    /// Twists in the order they were animated.
    scheduled: Vec<ScheduledTwist>,
    /// Automatic solver run, if enabled in the preferences.
    auto_solve: Option<SolveOutcome>,
    state: PyraminxState,
}

/// Resolves each key press, queues the resulting twists, and settles them
/// one at a time on a solved puzzle. Unbound keys are skipped.
fn run_key_presses(prefs: &Preferences, keys: &[String]) -> Result<KeySession> {
    let mut queue = TwistQueue::new(prefs.animation.timing());
    for key in keys {
        let press: KeyPress = key
            .parse()
            .map_err(|e| eyre!("invalid key press {key:?}: {e}"))?;
        match prefs.keybinds.resolve(&press) {
            Some(twist) => queue.push(twist),
            None => log::warn!("no keybind for {press}"),
        }
    }

    let mut state = PyraminxState::new();
    let mut scheduled = vec![];
    while let Some(twist) = queue.start_next() {
        scheduled.push(twist);
        queue.finish(&mut state);
    }

    let auto_solve = (prefs.solver.auto_solve && !state.is_solved()).then(|| {
        let outcome = RandomSolver::new().solve(&mut state, AUTO_SOLVE_MAX_STEPS);
        log::info!(
            "automatic solver applied {} twists (solved: {})",
            outcome.twists.len(),
            outcome.solved,
        );
        outcome
    });

    Ok(KeySession {
        scheduled,
        auto_solve,
        state,
    })
}

fn parse_move_args(moves: &[String]) -> Result<Vec<Twist>> {
    let joined = moves.join(" ");
    parse_twists(&joined).wrap_err_with(|| format!("error parsing moves {joined:?}"))
}

fn scramble_params(length: u32, seed: Option<String>) -> ScrambleParams {
    match seed {
        Some(seed) => ScrambleParams::with_seed(length, seed),
        None => ScrambleParams::new(length),
    }
}

fn watch_solve(
    chooser: &mut dyn MoveChooser,
    state: &mut PyraminxState,
    max_steps: usize,
    prefs: &Preferences,
    colored: bool,
) -> Vec<Twist> {
    let mut twists = vec![];
    eprint!("{}", net::render(state, prefs, colored));
    while !state.is_solved() && twists.len() < max_steps {
        std::thread::sleep(prefs.solver.interval());
        let twist = chooser.step(state);
        twists.push(twist);
        eprintln!("{twist}");
        eprint!("{}", net::render(state, prefs, colored));
    }
    twists
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from(["pyraminx", "show", "L", "R'", "--no-color"]);
        assert!(args.no_color);
        match args.subcommand {
            Subcommand::Show { moves, json } => {
                assert_eq!(vec!["L", "R'"], moves);
                assert!(!json);
            }
            other => panic!("unexpected subcommand {other:?}"),
        }

        let args = Args::parse_from(["pyraminx", "solve", "--scramble", "L R", "--rng-seed", "7"]);
        match args.subcommand {
            Subcommand::Solve {
                scramble,
                rng_seed,
                max_steps,
                ..
            } => {
                assert_eq!(Some("L R".to_string()), scramble);
                assert_eq!(Some(7), rng_seed);
                assert_eq!(1000, max_steps);
            }
            other => panic!("unexpected subcommand {other:?}"),
        }

        assert!(
            Args::try_parse_from(["pyraminx", "solve", "--scramble", "L", "--seed", "x"]).is_err()
        );
        assert!(Args::try_parse_from(["pyraminx", "keys"]).is_err());
    }

    #[test]
    fn test_key_presses_settle_in_order() {
        let prefs = Preferences::default();
        let keys = ["l".to_string(), "shift+L".to_string()];
        let session = run_key_presses(&prefs, &keys).unwrap();

        let twists: Vec<String> = session.scheduled.iter().map(|s| s.twist.to_string()).collect();
        assert_eq!(vec!["L", "L'"], twists);
        // The first twist is sped up because another one is waiting.
        assert_eq!(
            vec![375, 750],
            session
                .scheduled
                .iter()
                .map(|s| s.duration.as_millis())
                .collect::<Vec<_>>(),
        );
        assert!(session.state.is_solved());
        assert!(session.auto_solve.is_none());

        let keys = ["alt+w".to_string(), "q".to_string()];
        let session = run_key_presses(&prefs, &keys).unwrap();
        assert_eq!(1, session.scheduled.len());
        assert_eq!("l", session.scheduled[0].twist.to_string());
        assert!(!session.state.is_solved());

        assert!(run_key_presses(&prefs, &["ctrl+l".to_string()]).is_err());
    }

    #[test]
    fn test_key_presses_with_auto_solve() {
        let mut prefs = Preferences::default();
        prefs.solver.auto_solve = true;
        let session = run_key_presses(&prefs, &["r".to_string()]).unwrap();
        let outcome = session.auto_solve.unwrap();
        assert_eq!(outcome.solved, session.state.is_solved());
        assert!(outcome.twists.len() <= AUTO_SOLVE_MAX_STEPS);

        let mut replayed = PyraminxState::new();
        replayed.apply_twists(session.scheduled.iter().map(|s| s.twist));
        replayed.apply_twists(outcome.twists.iter().copied());
        assert_eq!(session.state, replayed);

        // Nothing to solve.
        let session = run_key_presses(&prefs, &["q".to_string()]).unwrap();
        assert!(session.auto_solve.is_none());
    }

    #[test]
    fn test_parse_move_args() {
        let twists = parse_move_args(&["L R'".to_string(), "u".to_string()]).unwrap();
        assert_eq!("L R' u", format_twists(&twists));
        assert!(parse_move_args(&["X".to_string()]).is_err());
    }
}
