use anyhow::{Context, Result};
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use inflect::cli::output::{print_config, print_records, OutputFormat, Record, Rendered};
use inflect::config::{Overrides, LOCAL_CONFIG_FILE};
use inflect::inflector::{self, AccessorOption, AccessorOptions};
use inflect::{Config, Pluralizer, SplitMode};
use rayon::prelude::*;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "inflect")]
#[command(version, about = "Deterministic string inflection: tokens, case styles, slugs and ids", long_about = None)]
struct Cli {
    /// Treat uppercase runs as acronyms (FAQ stays one word)
    #[arg(short, long, global = true)]
    intelligent: bool,

    /// Pluralization adapter (english, identity)
    #[arg(long, global = true, env = "INFLECT_ADAPTER")]
    adapter: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print every input next to its result (text format only)
    #[arg(long, global = true)]
    echo: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct Inputs {
    /// Strings to transform; read from stdin, one per line, when omitted
    #[arg(value_name = "INPUT")]
    values: Vec<String>,
}

#[derive(Args, Debug)]
struct AccessorArgs {
    /// Accessor option: noSanitizing|ns, intelligentSplitting|is
    #[arg(long = "option", value_name = "OPTION")]
    options: Vec<AccessorOption>,

    #[command(flatten)]
    inputs: Inputs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split into lowercase words
    Tokens(Inputs),
    /// Lowercase, dash separated, ASCII folded slug
    Slug(Inputs),
    /// Slug that keeps a known file extension
    File {
        /// Keep the directory part of a path and only slug the file name
        #[arg(long)]
        path: bool,

        #[command(flatten)]
        inputs: Inputs,
    },
    /// Spaced, capitalized words ("Given String")
    Human(Inputs),
    /// UpperCamelCase
    Camel(Inputs),
    /// lowerCamelCase
    CamelBack(Inputs),
    /// dash-separated
    Dashed(Inputs),
    /// underscore_separated
    Underscore(Inputs),
    /// Getter name ("getMyProperty")
    Getter {
        /// Prefix to use instead of the configured one (may be empty)
        #[arg(long)]
        prefix: Option<String>,

        #[command(flatten)]
        accessor: AccessorArgs,
    },
    /// Setter name ("setMyProperty")
    Setter(AccessorArgs),
    /// Property name with accessor prefixes removed ("myProperty")
    Property(AccessorArgs),
    /// Word order independent comparison key
    Comparable {
        /// Do not append occurrence counts
        #[arg(long)]
        no_counts: bool,

        #[command(flatten)]
        inputs: Inputs,
    },
    /// UUID shaped fingerprint of the comparable form
    Id(Inputs),
    /// Plural form of each word
    Plural(Inputs),
    /// Singular form of each word
    Singular(Inputs),
    /// Show config file locations and the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "inflect", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(Overrides {
        intelligent_splitting: cli.intelligent.then_some(true),
        adapter: cli.adapter.clone(),
    })?;

    if let Commands::Config = command {
        let global = Config::global_config_path();
        return print_config(
            &config,
            global.as_deref(),
            &PathBuf::from(LOCAL_CONFIG_FILE),
            !cli.no_color,
        );
    }

    let records = run(command, &config)?;
    print_records(&records, cli.format, !cli.no_color, cli.echo)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(command: Commands, config: &Config) -> Result<Vec<Record>> {
    let mode = config.split_mode();

    let records = match command {
        Commands::Tokens(inputs) => {
            transform(inputs, |s| Rendered::Tokens(inflector::tokenize(s, mode)))?
        }
        Commands::Slug(inputs) => transform(inputs, |s| single(inflector::to_slug(s)))?,
        Commands::File { path, inputs } => {
            let expect_path = path || config.expect_path;
            transform(inputs, |s| single(inflector::to_file(s, expect_path)))?
        }
        Commands::Human(inputs) => transform(inputs, |s| single(inflector::to_human(s, mode)))?,
        Commands::Camel(inputs) => {
            transform(inputs, |s| single(inflector::to_camel_case(s, mode)))?
        }
        Commands::CamelBack(inputs) => {
            transform(inputs, |s| single(inflector::to_camel_back(s, mode)))?
        }
        Commands::Dashed(inputs) => transform(inputs, |s| single(inflector::to_dashed(s, mode)))?,
        Commands::Underscore(inputs) => {
            transform(inputs, |s| single(inflector::to_underscore(s, mode)))?
        }
        Commands::Getter { prefix, accessor } => {
            let options = accessor_options(&accessor.options, mode);
            let prefix = prefix.unwrap_or_else(|| config.getter_prefix.clone());
            transform(accessor.inputs, |s| {
                single(inflector::to_getter(s, Some(prefix.as_str()), options))
            })?
        }
        Commands::Setter(accessor) => {
            let options = accessor_options(&accessor.options, mode);
            transform(accessor.inputs, |s| single(inflector::to_setter(s, options)))?
        }
        Commands::Property(accessor) => {
            let options = accessor_options(&accessor.options, mode);
            transform(accessor.inputs, |s| single(inflector::to_property(s, options)))?
        }
        Commands::Comparable { no_counts, inputs } => {
            let count_occurrences = config.count_occurrences && !no_counts;
            transform(inputs, |s| {
                single(inflector::to_comparable(s, count_occurrences))
            })?
        }
        Commands::Id(inputs) => transform(inputs, |s| single(inflector::deterministic_id(s)))?,
        Commands::Plural(inputs) => {
            let mut pluralizer = Pluralizer::new(config.adapter.clone());
            let adapter = pluralizer.adapter()?;
            transform(inputs, |s| single(adapter.to_plural(s)))?
        }
        Commands::Singular(inputs) => {
            let mut pluralizer = Pluralizer::new(config.adapter.clone());
            let adapter = pluralizer.adapter()?;
            transform(inputs, |s| single(adapter.to_singular(s)))?
        }
        Commands::Config => Vec::new(),
    };

    Ok(records)
}

fn single(value: String) -> Rendered {
    Rendered::Single(value)
}

/// A configured intelligent mode turns on intelligent splitting for accessors too.
fn accessor_options(flags: &[AccessorOption], mode: SplitMode) -> AccessorOptions {
    let mut options: AccessorOptions = flags.iter().copied().collect();
    options.intelligent_splitting |= mode == SplitMode::Intelligent;
    options
}

fn transform<F>(inputs: Inputs, f: F) -> Result<Vec<Record>>
where
    F: Fn(&str) -> Rendered + Sync + Send,
{
    let values = if inputs.values.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read input from stdin")?
    } else {
        inputs.values
    };

    tracing::debug!(count = values.len(), "transforming inputs");

    Ok(values
        .into_par_iter()
        .map(|input| {
            let output = f(&input);
            Record { input, output }
        })
        .collect())
}
