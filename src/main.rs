//! Linkmap CLI
//!
//! Usage:
//!   linkmap [OPTIONS] [PATHS]...
//!
//! Options:
//!   -r, --rules <FILE>   Rule file (one `<input> <output>` pair per line)
//!   -c, --config <FILE>  Config file (TOML format)
//!   --check              Validate the rules and exit
//!   --explain            Print the compiled rules in evaluation order
//!   -v, --verbose        Debug logging
//!   -h, --help           Print help

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use linkmap::{Config, ConfigError, RuleSet};

#[derive(Parser)]
#[command(name = "linkmap")]
#[command(about = "Map repository file paths to links using a rule file")]
struct Cli {
    /// Paths to map (reads one per line from stdin if not provided)
    paths: Vec<String>,

    /// Rule file (overrides `rules` in the config file)
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate the rules and exit
    #[arg(long)]
    check: bool,

    /// Print the compiled rules in evaluation order and exit
    #[arg(long)]
    explain: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    let config = match &cli.rules {
        Some(path) => config.with_rules_file(path),
        None => config,
    };

    init_logging(&config, cli.verbose);

    if config.rules_file.is_none() && config.inline_rules.is_empty() {
        eprintln!("Error: no rules given; pass --rules <FILE> or a config with rules");
        return ExitCode::FAILURE;
    }

    let rules = match config.load_rules() {
        Ok(rules) => rules,
        Err(e) => {
            report_config_error(&e);
            return ExitCode::FAILURE;
        }
    };
    info!(rules = rules.len(), "loaded rules");

    if cli.check {
        println!("{} rule(s) OK", rules.len());
        return ExitCode::SUCCESS;
    }

    if cli.explain {
        print_explain(&rules);
        return ExitCode::SUCCESS;
    }

    if cli.paths.is_empty() && io::stdin().is_terminal() {
        eprintln!("Error: no paths given; pass them as arguments or on stdin");
        return ExitCode::FAILURE;
    }

    let paths: Box<dyn Iterator<Item = io::Result<String>>> = if cli.paths.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(cli.paths.into_iter().map(Ok))
    };

    let mut failed = false;
    for path in paths {
        let path = match path {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if path.is_empty() {
            continue;
        }
        match rules.evaluate(&path) {
            Ok(link) => {
                debug!(%path, %link, "mapped");
                println!("{}", link);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    debug!("Logging initialized with level: {}", level);
}

fn report_config_error(err: &ConfigError) {
    match err {
        ConfigError::Rules {
            path,
            text,
            source,
        } => {
            let filename = path.display().to_string();
            eprint!("{}", source.format(text, &filename));
        }
        other => eprintln!("Error: {}", other),
    }
}

fn print_explain(rules: &RuleSet) {
    for (i, rule) in rules.iter().enumerate() {
        println!("{}. {}", i + 1, rule);
        println!("   input ({} segments):", rule.input().len());
        for segment in rule.input().segments() {
            println!("     {}", segment);
        }
        println!("   output:");
        for segment in rule.output().segments() {
            println!("     {}", segment);
        }
    }
}
