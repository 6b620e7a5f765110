//! CLI entry point for sapling

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sapling::{
    InternPolicy, OutputConfig, TreeBuilder, TreeFormatter, collect_stats, parse_script,
    print_json, print_stats, print_stats_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sapling")]
#[command(about = "Renders a virtual file tree from a DIR/FILE creation script")]
#[command(version)]
struct Args {
    /// Command script to read; '-' or omitted reads standard input
    script: Option<PathBuf>,

    /// Output the report in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Show summary statistics instead of the tree
    #[arg(long = "stats")]
    stats: bool,

    /// Allocate attributes per file instead of sharing canonical bundles
    #[arg(long = "no-intern")]
    no_intern: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Read the whole command script from the given path, or stdin for `-`.
fn read_script(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn main() {
    let args = Args::parse();

    let input = match read_script(args.script.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            let shown = args
                .script
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<stdin>".to_string());
            eprintln!("sapling: cannot read '{}': {}", shown, e);
            process::exit(1);
        }
    };

    let commands = match parse_script(&input) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("sapling: {}", e);
            process::exit(1);
        }
    };

    let policy = if args.no_intern {
        InternPolicy::PerFile
    } else {
        InternPolicy::Shared
    };

    let mut builder = TreeBuilder::new(policy);
    if let Err(e) = builder.apply(commands) {
        eprintln!("sapling: {}", e);
        process::exit(1);
    }
    let distinct_attrs = builder.distinct_attrs();
    let root = builder.finish();

    let result = if args.stats {
        let stats = collect_stats(&root, distinct_attrs);
        if args.json {
            print_stats_json(&stats)
        } else {
            print_stats(&stats, should_use_color(args.color))
        }
    } else if args.json {
        print_json(&root)
    } else {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
        });
        formatter.print(&root)
    };

    if let Err(e) = result {
        eprintln!("sapling: error writing output: {}", e);
        process::exit(1);
    }
}
