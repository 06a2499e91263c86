//! Algorithm trace CLI.
//!
//! Provides the `algotrace` binary with subcommands to list the catalog,
//! print a generated trace as JSON, and play a trace step by step in the
//! terminal. Uses the same `algotrace_gen::generate()` pipeline as the HTTP
//! server, so validation and output are identical from both entry points.

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use algotrace_core::{InputError, Timeline};
use algotrace_gen::{
    catalog, default_input, generate, sample_input, Algorithm, AlgorithmInput, DynTrace,
    GenError, InputLimits,
};
use algotrace_playback::{AutoPlayer, PlaybackConfig, Speed};

/// Step-by-step traces of classic interview algorithms.
#[derive(Parser)]
#[command(name = "algotrace", about = "Step-by-step algorithm traces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the input for a trace comes from.
#[derive(clap::Args)]
struct InputArgs {
    /// Algorithm slug, e.g. `binary-search` (see `algotrace list`).
    slug: String,

    /// Input as JSON; the `algorithm` tag may be omitted.
    #[arg(short, long, conflicts_with = "seed")]
    input: Option<String>,

    /// Generate a random input from this seed instead of the textbook example.
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every algorithm.
    List,

    /// Print the full trace as JSON.
    Trace {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },

    /// Play the trace in the terminal.
    Play {
        #[command(flatten)]
        input: InputArgs,

        /// Playback speed: 0.5, 1 or 2.
        #[arg(long, default_value = "1")]
        speed: Speed,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let exit_code = match cli.command {
        Commands::List => run_list(),
        Commands::Trace { input, pretty } => run_trace(&input, pretty),
        Commands::Play { input, speed } => run_play(&input, speed),
    };
    process::exit(exit_code);
}

fn run_list() -> i32 {
    for entry in catalog() {
        println!(
            "{:<28} {:<48} {:?}",
            entry.slug, entry.title, entry.difficulty
        );
    }
    0
}

fn run_trace(args: &InputArgs, pretty: bool) -> i32 {
    let trace = match build_trace(args) {
        Ok(trace) => trace,
        Err(code) => return code,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&trace)
    } else {
        serde_json::to_string(&trace)
    };
    match json {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to encode trace: {}", e);
            2
        }
    }
}

fn run_play(args: &InputArgs, speed: Speed) -> i32 {
    let trace = match build_trace(args) {
        Ok(trace) => trace,
        Err(code) => return code,
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {}", e);
            return 2;
        }
    };
    runtime.block_on(play(&trace, speed));
    0
}

async fn play(trace: &DynTrace, speed: Speed) {
    let player = AutoPlayer::new(trace, PlaybackConfig::from_env());
    let mut updates = player.subscribe();
    player.set_speed(speed).await;

    print_step(trace, 0);
    if !player.toggle_play().await {
        return;
    }

    let mut shown = 0;
    while updates.changed().await.is_ok() {
        let state = *updates.borrow_and_update();
        if state.current_index != shown {
            for index in unseen_steps(shown, state.current_index) {
                print_step(trace, index);
            }
            shown = state.current_index;
        }
        if !state.is_playing {
            break;
        }
    }
    player.dispose().await;
}

/// Steps to print when the cursor moves from `shown` to `current`.
///
/// Consecutive ticks can coalesce into one watch update, so a forward jump
/// prints every step it passed over.
fn unseen_steps(shown: usize, current: usize) -> std::ops::RangeInclusive<usize> {
    if current > shown {
        shown + 1..=current
    } else {
        current..=current
    }
}

fn print_step(trace: &DynTrace, index: usize) {
    if let Some(step) = trace.get(index) {
        println!(
            "[{}/{}] {}: {}",
            index + 1,
            trace.len(),
            step.kind,
            step.description
        );
    }
}

/// Resolves the input and generates its trace, or returns an exit code.
fn build_trace(args: &InputArgs) -> Result<DynTrace, i32> {
    let input = resolve_input(args).map_err(|e| {
        eprintln!("Error: {}", e);
        1
    })?;
    generate(&input, &InputLimits::default()).map_err(|e| {
        eprintln!("Error: {}", e);
        match e {
            GenError::Input(_) => 1,
            GenError::Encode(_) => 2,
        }
    })
}

fn resolve_input(args: &InputArgs) -> Result<AlgorithmInput, InputError> {
    let algorithm = Algorithm::from_slug(&args.slug)?;

    let Some(raw) = &args.input else {
        return Ok(match args.seed {
            Some(seed) => sample_input(algorithm, seed),
            None => default_input(algorithm),
        });
    };

    let mut value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| InputError::Malformed {
            reason: e.to_string(),
        })?;
    let Some(object) = value.as_object_mut() else {
        return Err(InputError::Malformed {
            reason: "input must be a JSON object".to_string(),
        });
    };
    let tag = object
        .entry("algorithm")
        .or_insert_with(|| algorithm.slug().into());
    if tag.as_str() != Some(algorithm.slug()) {
        return Err(InputError::Malformed {
            reason: format!("input is tagged {} but {} was requested", tag, algorithm),
        });
    }

    serde_json::from_value(value).map_err(|e| InputError::Malformed {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(slug: &str, input: Option<&str>, seed: Option<u64>) -> InputArgs {
        InputArgs {
            slug: slug.to_string(),
            input: input.map(ToString::to_string),
            seed,
        }
    }

    #[test]
    fn untagged_input_takes_the_slug() {
        let input = resolve_input(&args("max-area", Some(r#"{"heights": [1, 2, 1]}"#), None)).unwrap();
        assert_eq!(
            input,
            AlgorithmInput::MaxArea {
                heights: vec![1, 2, 1]
            }
        );
    }

    #[test]
    fn mismatched_tag_is_rejected() {
        let err = resolve_input(&args(
            "max-area",
            Some(r#"{"algorithm": "subsets", "nums": [1]}"#),
            None,
        ))
        .unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
    }

    #[test]
    fn seed_selects_a_sample() {
        let input = resolve_input(&args("dfs", None, Some(3))).unwrap();
        assert_eq!(input, sample_input(Algorithm::Dfs, 3));
    }

    #[test]
    fn no_input_uses_the_textbook_example() {
        let input = resolve_input(&args("trie", None, None)).unwrap();
        assert_eq!(input, default_input(Algorithm::Trie));
    }

    #[test]
    fn unknown_slug_fails() {
        assert!(resolve_input(&args("bogo-sort", None, None)).is_err());
    }

    #[test]
    fn cli_parses_play_speed() {
        let cli = Cli::try_parse_from(["algotrace", "play", "n-queens", "--speed", "2"]).unwrap();
        let Commands::Play { speed, input } = cli.command else {
            panic!("expected play");
        };
        assert_eq!(speed, Speed::Double);
        assert_eq!(input.slug, "n-queens");
    }

    #[test]
    fn coalesced_ticks_print_every_skipped_step() {
        assert_eq!(unseen_steps(2, 5).collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(unseen_steps(2, 3).collect::<Vec<_>>(), vec![3]);
        assert_eq!(unseen_steps(4, 0).collect::<Vec<_>>(), vec![0]);
    }
}
