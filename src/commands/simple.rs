//! Simple interactive CLI mode
//!
//! Line-based session over an in-memory grid: enter feedback rows one at a
//! time and ask for the candidates whenever you like.

use super::generate::DEFAULT_MAX_CANDIDATES;
use crate::core::{Grid, InputGrid};
use crate::error::GridError;
use crate::output::formatters::{candidate_summary, grid_lines, row_notation};
use crate::solver::Generator;
use anyhow::Result;
use log::debug;
use std::io::{self, BufRead, Write};

/// Settings for an interactive session
#[derive(Debug, Clone, Copy)]
pub struct SimpleConfig {
    /// Candidates shown after `generate`
    pub limit: usize,
    /// Larger search spaces are refused
    pub max_candidates: u64,
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            limit: 50,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Empty,
    Row(&'a str),
    Generate,
    Undo,
    Clear,
    Show,
    Help,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Empty,
            "generate" | "g" => Self::Generate,
            "undo" | "u" => Self::Undo,
            "clear" | "c" | "new" => Self::Clear,
            "show" | "s" => Self::Show,
            "help" | "h" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Row(line),
        }
    }
}

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(generator: &Generator, config: &SimpleConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(generator, config, stdin.lock(), stdout.lock())
}

/// Run the simple interactive mode on arbitrary streams
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    generator: &Generator,
    config: &SimpleConfig,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut grid = generator.new_grid();

    writeln!(
        output,
        "{}x{} grid over '{}' ({} duplicates)",
        generator.config().rows,
        generator.config().columns,
        generator.alphabet(),
        generator.duplicates()
    )?;
    print_help(&mut output)?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Row(text) => enter_row(generator, &mut grid, text, &mut output)?,
            Command::Generate => generate(generator, &grid, config, &mut output)?,
            Command::Undo => match grid.last_filled_row() {
                Some(row) => {
                    let removed = row_notation(&grid.rows()[row]);
                    grid.clear_row(row);
                    writeln!(output, "Removed row {} ({removed})", row + 1)?;
                }
                None => writeln!(output, "Nothing to undo")?,
            },
            Command::Clear => {
                grid.clear();
                writeln!(output, "Grid cleared")?;
            }
            Command::Show => show_grid(&grid, &mut output)?,
            Command::Help => print_help(&mut output)?,
            Command::Quit => return Ok(()),
        }
    }
}

fn enter_row<W: Write>(
    generator: &Generator,
    grid: &mut Grid,
    text: &str,
    output: &mut W,
) -> Result<()> {
    let entered = grid
        .next_empty_row()
        .ok_or(GridError::Full)
        .and_then(|row| grid.enter(row, text, generator.alphabet()));

    match entered {
        Ok(()) => show_grid(grid, output),
        Err(err) => {
            debug!("rejected row '{text}': {err}");
            writeln!(output, "error: {err}")?;
            Ok(())
        }
    }
}

fn generate<W: Write>(
    generator: &Generator,
    grid: &Grid,
    config: &SimpleConfig,
    output: &mut W,
) -> Result<()> {
    let search_space = generator.search_space(grid);
    if search_space > u128::from(config.max_candidates) {
        writeln!(
            output,
            "error: {search_space} strings to enumerate exceeds the limit of {}",
            config.max_candidates
        )?;
        return Ok(());
    }

    let candidates = generator.generate(grid);
    let plural = if candidates.len() == 1 { "" } else { "s" };
    writeln!(output, "{} candidate{plural}", candidates.len())?;
    if !candidates.is_empty() {
        writeln!(output, "{}", candidate_summary(&candidates, config.limit))?;
    }
    Ok(())
}

fn show_grid<W: Write>(grid: &Grid, output: &mut W) -> Result<()> {
    for line in grid_lines(grid.rows()) {
        writeln!(output, "  {line}")?;
    }
    Ok(())
}

fn print_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Enter rows as GUESS/FEEDBACK, e.g. CRANE/G-Y--")?;
    writeln!(output, "  G/g/🟩 correct, Y/y/🟨 wrong position, -/_/⬜ absent, ? unset")?;
    writeln!(
        output,
        "Commands: generate (g), undo (u), clear (c), show (s), help (h), quit (q)"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::core::{Alphabet, AlphabetMode};

    fn session(symbols: &str, rows: usize, columns: usize, script: &str) -> String {
        let alphabet = Alphabet::custom(symbols).unwrap();
        let config = GeneratorConfig::new(rows, columns, AlphabetMode::LettersOnly);
        let generator = Generator::with_alphabet(alphabet, config).unwrap();

        let mut output = Vec::new();
        run_simple_with(
            &generator,
            &SimpleConfig::default(),
            script.as_bytes(),
            &mut output,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("  "), Command::Empty);
        assert_eq!(Command::parse("G\n"), Command::Generate);
        assert_eq!(Command::parse("Undo"), Command::Undo);
        assert_eq!(Command::parse("new"), Command::Clear);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("ab/g-\n"), Command::Row("ab/g-"));
    }

    #[test]
    fn unconstrained_generate() {
        let output = session("AB", 2, 2, "generate\nquit\n");
        assert!(output.contains("4 candidates"));
        assert!(output.contains("AA AB BA BB"));
    }

    #[test]
    fn rows_constrain_generation() {
        let output = session("ABC", 2, 2, "AB/G-\ng\n");
        assert!(output.contains("1. AB 🟩⬜"));
        assert!(output.contains("2 candidates"));
        assert!(output.contains("AA AC"));
    }

    #[test]
    fn undo_and_clear() {
        let output = session("ABC", 2, 2, "AB/G-\nundo\ng\nundo\nAB/GG\nclear\ng\n");
        assert!(output.contains("Removed row 1 (AB/G-)"));
        assert!(output.contains("Nothing to undo"));
        assert!(output.contains("Grid cleared"));
        assert_eq!(output.matches("9 candidates").count(), 2);
    }

    #[test]
    fn bad_rows_are_reported() {
        let output = session("AB", 1, 2, "AX/--\nAB\nABA/---\nAB/--\nBA/--\ng\n");
        assert!(output.contains("'X' is not part of the configured alphabet"));
        assert!(output.contains("malformed row"));
        assert!(output.contains("row has 3 cells, expected 2"));
        assert!(output.contains("already filled"));
        // AB/-- rules out every symbol, so only the empty string is left
        assert!(output.contains("1 candidate\n"));
    }

    #[test]
    fn oversized_generate_refused() {
        let alphabet = Alphabet::custom("ABC").unwrap();
        let config = GeneratorConfig::new(1, 3, AlphabetMode::LettersOnly);
        let generator = Generator::with_alphabet(alphabet, config).unwrap();
        let limits = SimpleConfig {
            limit: 5,
            max_candidates: 10,
        };

        let mut output = Vec::new();
        run_simple_with(&generator, &limits, "g\n".as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("27 strings to enumerate exceeds the limit of 10"));
    }
}
