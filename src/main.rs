use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use thesis_roster::config::{self, RosterConfig};
use thesis_roster::order::{Listing, YearComparison, sort_entries};
use thesis_roster::{output, parse, render};

#[derive(Parser)]
#[command(name = "thesis-roster")]
#[command(about = "Renders a thesis/dissertation roster file as an embeddable HTML listing")]
#[command(long_about = "\
Renders a thesis/dissertation roster file as an embeddable HTML listing

The roster is plain text: seven lines per entry, in the order author, year,
title, advisor, affiliation, degree, URL, with a blank line closing each
entry. An empty URL line means the entry has no link.

  Greenwald, Ray
  1985
  Radar observations of the high-latitude ionosphere
  Advisor, Some
  Johns Hopkins University
  PhD
  https://theses.example.edu/greenwald

The fragment is printed to stdout between begin/end comment markers, ready
to paste into the publications page between the same markers. Entries come
out alphabetical by author (the default) or grouped by year, newest first
(--by year).

An optional config.toml in the roster file's directory adjusts entry
limits, year comparison, and table width.

Run 'thesis-roster gen-config' to print a documented config.toml.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Arguments for the default render invocation.
#[derive(clap::Args, Clone)]
struct RenderArgs {
    /// Roster file to render
    #[arg(default_value = "superdarn_theses.txt")]
    file: PathBuf,

    /// Listing order for the generated fragment
    #[arg(long, value_enum, default_value_t = By::Author)]
    by: By,
}

#[derive(Clone, Copy, ValueEnum)]
enum By {
    /// Alphabetical by author, with A-Z jump buckets
    Author,
    /// Newest year first, with per-year jump links and headings
    Year,
}

impl From<By> for Listing {
    fn from(by: By) -> Self {
        match by {
            By::Author => Listing::Author,
            By::Year => Listing::Year,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Parse the roster and print a plain-text inventory without rendering
    Check {
        /// Roster file to check
        #[arg(default_value = "superdarn_theses.txt")]
        file: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Command::Check { file }) => {
            let config = config::load_config(&roster_dir(&file))?;
            let entries = parse::parse_file(&file, config.limits.max_entries)?;
            output::print_check_output(&entries);
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
        }
        None => {
            let config = config::load_config(&roster_dir(&cli.render.file))?;
            let mut entries = parse::parse_file(&cli.render.file, config.limits.max_entries)?;
            let listing: Listing = cli.render.by.into();
            sort_entries(&mut entries, listing, year_comparison(&config));
            let fragment = render::render_listing(&entries, listing, &config.table);
            print!("{}", fragment.into_string());
        }
    }

    Ok(())
}

/// Map the sorting config onto a year comparison strategy.
fn year_comparison(config: &RosterConfig) -> YearComparison {
    if config.sorting.numeric_years {
        YearComparison::Numeric
    } else {
        YearComparison::Lexicographic
    }
}

/// Directory the roster file lives in; `config.toml` is looked up there.
///
/// A bare filename has an empty parent, which maps to the current directory.
fn roster_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
