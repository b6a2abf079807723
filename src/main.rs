use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};

use ruledoc::Config;

#[derive(Parser)]
#[command(name = "ruledoc")]
#[command(about = "Convert HTML rule descriptions into per-language guideline documents")]
struct Cli {
    /// Languages to generate (defaults to the configured list)
    languages: Vec<String>,

    /// Config file
    #[arg(short, long, default_value = "ruledoc.toml")]
    config: PathBuf,

    /// Directory holding `<language>.toml` rule files
    #[arg(short, long)]
    rules_dir: Option<PathBuf>,

    /// Directory to write documents to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print documents instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    if let Some(dir) = cli.rules_dir {
        config.rules_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    let languages = if cli.languages.is_empty() {
        config.languages.clone()
    } else {
        cli.languages
    };

    // Each language is an independent document; one failing must not stop
    // the others.
    let mut failed = 0;
    for language in &languages {
        if let Err(e) = generate(&config, language, cli.stdout) {
            error!("{language}: {e:#}");
            failed += 1;
        }
    }

    info!("Finished: {} of {} documents", languages.len() - failed, languages.len());
    if failed > 0 {
        std::process::exit(1);
    }
}

fn generate(config: &Config, language: &str, stdout: bool) -> Result<()> {
    info!("Generating {language}");

    let rules_path = config.rules_path(language);
    let document = ruledoc::convert_rule_file(&rules_path)
        .with_context(|| format!("cannot load rules for {language}"))?;

    if !document.issues.is_empty() {
        warn!("{language}: {} issue(s) while converting", document.issues.len());
    }

    let text = ruledoc::render_text(&document.blocks);
    if stdout {
        print!("{text}");
        return Ok(());
    }

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("cannot create {}", config.output_dir.display()))?;
    let output = config.output_path(language);
    fs::write(&output, text).with_context(|| format!("cannot write {}", output.display()))?;

    info!("Created {}", output.display());
    Ok(())
}
