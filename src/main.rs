//! Wordle Candidates - CLI
//!
//! Lists every string consistent with Wordle-style feedback, interactively or
//! from rows given on the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_candidates::{
    commands::{
        CheckConfig, DEFAULT_MAX_CANDIDATES, SimpleConfig, generate_candidates, run_check,
        run_simple,
    },
    config::{DuplicateHandling, GeneratorConfig},
    core::AlphabetMode,
    output::{print_check_result, print_generate_result},
    solver::Generator,
};

#[derive(Parser)]
#[command(
    name = "wordle_candidates",
    about = "Enumerate every string consistent with Wordle-style guess feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guess rows in the grid
    #[arg(short, long, global = true, default_value = "5")]
    rows: usize,

    /// Number of symbols per guess
    #[arg(short, long, global = true, default_value = "5")]
    columns: usize,

    /// Alphabet: letters (default), letters-digits, digits, digits-operators
    #[arg(short, long, global = true, default_value = "letters")]
    alphabet: AlphabetMode,

    /// Duplicate letters: global (default) or per-occurrence
    #[arg(short, long, global = true, default_value = "global")]
    duplicates: DuplicateHandling,

    /// Log more (-v info, -vv debug); `RUST_LOG` overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): enter rows and generate as you go
    Simple {
        /// Candidates shown after each generate
        #[arg(short, long, default_value = "50")]
        limit: usize,

        /// Refuse to enumerate more strings than this
        #[arg(short, long, default_value_t = DEFAULT_MAX_CANDIDATES)]
        max_candidates: u64,
    },

    /// Generate candidates for rows given as GUESS/FEEDBACK (e.g. CRANE/G-Y--)
    Generate {
        /// Grid rows, top to bottom
        #[arg(id = "grid_rows", value_name = "ROWS", required = true, allow_hyphen_values = true)]
        rows: Vec<String>,

        /// Candidates shown
        #[arg(short, long, default_value = "100")]
        limit: usize,

        /// Refuse to enumerate more strings than this
        #[arg(short, long, default_value_t = DEFAULT_MAX_CANDIDATES)]
        max_candidates: u64,

        /// Print every candidate on its own line and nothing else
        #[arg(short, long)]
        plain: bool,
    },

    /// Play random games and report how often the secret survives
    Check {
        /// Number of random games
        #[arg(short = 'n', long, default_value = "200")]
        trials: usize,

        /// Guesses entered per game
        #[arg(short, long, default_value = "2")]
        guesses: usize,

        /// Seed for the first game; game i uses seed + i
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Skip games whose search space is larger than this
        #[arg(short, long, default_value_t = DEFAULT_MAX_CANDIDATES)]
        max_candidates: u64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GeneratorConfig::new(cli.rows, cli.columns, cli.alphabet)
        .with_duplicates(cli.duplicates);
    let generator = Generator::new(config)?;

    // Default to the interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple {
        limit: 50,
        max_candidates: DEFAULT_MAX_CANDIDATES,
    });

    match command {
        Commands::Simple {
            limit,
            max_candidates,
        } => run_simple(
            &generator,
            &SimpleConfig {
                limit,
                max_candidates,
            },
        ),
        Commands::Generate {
            rows,
            limit,
            max_candidates,
            plain,
        } => run_generate_command(&generator, &rows, limit, max_candidates, plain),
        Commands::Check {
            trials,
            guesses,
            seed,
            max_candidates,
        } => {
            let config = CheckConfig {
                trials,
                guesses,
                seed,
                max_candidates,
                show_progress: true,
            };
            let result = run_check(&generator, &config)?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn run_generate_command(
    generator: &Generator,
    rows: &[String],
    limit: usize,
    max_candidates: u64,
    plain: bool,
) -> Result<()> {
    let result = generate_candidates(generator, rows, max_candidates)?;

    if plain {
        for candidate in &result.candidates {
            println!("{candidate}");
        }
    } else {
        print_generate_result(&result, limit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_rows_may_start_with_minus() {
        let cli = Cli::try_parse_from([
            "wordle_candidates",
            "--alphabet",
            "digits-operators",
            "--columns",
            "6",
            "generate",
            "-1+3=2/G-----",
            "2*3=66/-G----",
        ])
        .unwrap();

        assert_eq!(cli.alphabet, AlphabetMode::DigitsAndOperators);
        match cli.command {
            Some(Commands::Generate { rows, .. }) => {
                assert_eq!(rows, ["-1+3=2/G-----", "2*3=66/-G----"]);
            }
            _ => panic!("expected the generate subcommand"),
        }
    }

    #[test]
    fn defaults_to_interactive_mode() {
        let cli = Cli::try_parse_from(["wordle_candidates"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.duplicates, DuplicateHandling::Global);
        assert_eq!((cli.rows, cli.columns), (5, 5));
    }
}
