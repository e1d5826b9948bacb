/*!
A thin command-line driver over the `dawg_dict` library.

Command-line entry points are outside the library's scope, so
no logic lives here beyond argument parsing and calls into the library.
*/

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dawg_dict::graph::anagram::Fixed;
use dawg_dict::letter::DEFAULT_BLANK;
use dawg_dict::Graph;

#[derive(Parser)]
#[command(name = "dawg-tool", about = "Build and query compact DAWG dictionaries")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Build a binary graph from a one-word-per-line input file.
  Build {
    input: PathBuf,
    output: PathBuf,
  },
  /// Check whether a word is in a graph.
  Lookup {
    graph: PathBuf,
    word: String,
  },
  /// Enumerate anagrams of a rack against a graph.
  Anagram {
    graph: PathBuf,
    rack: String,
    word_length: usize,
    /// `position:letter` pairs, e.g. `2:r`.
    #[arg(long = "fixed")]
    fixed: Vec<String>,
  },
}

fn parse_fixed(entries: &[String]) -> Result<Fixed, String> {
  let mut fixed = Fixed::new();
  for entry in entries {
    let (position, letter) = entry
      .split_once(':')
      .ok_or_else(|| format!("malformed --fixed entry `{entry}`, expected position:letter"))?;
    let position: usize = position
      .parse()
      .map_err(|_| format!("malformed position in `{entry}`"))?;
    let letter = letter
      .bytes()
      .next()
      .ok_or_else(|| format!("missing letter in `{entry}`"))?;
    fixed.insert(position, letter);
  }
  Ok(fixed)
}

fn run(cli: Cli) -> dawg_dict::Result<()> {
  match cli.command {
    Command::Build { input, output } => {
      log::info!("building graph from {}", input.display());
      Graph::build_from_file(&input, &output)?;
      log::info!("wrote graph to {}", output.display());
    }
    Command::Lookup { graph, word } => {
      let graph = Graph::load(&graph)?;
      println!("{}", graph.lookup(&word));
    }
    Command::Anagram {
      graph,
      rack,
      word_length,
      fixed,
    } => {
      let graph = Graph::load(&graph)?;
      let fixed = parse_fixed(&fixed)
        .map_err(dawg_dict::DawgError::InvalidArgument)?;
      let words = graph.anagrams(rack.as_bytes(), word_length, &fixed, DEFAULT_BLANK);
      for word in words {
        println!("{word}");
      }
    }
  }
  Ok(())
}

fn main() -> ExitCode {
  env_logger::init();
  let cli = Cli::parse();
  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err}");
      ExitCode::FAILURE
    }
  }
}
