//! vidlink - video link detection
//!
//! Reports which provider a link belongs to and the URL to embed it with.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vidlink::utils::{self, Settings};
use vidlink::{EmbedResolver, ProviderRegistry, VideoMatch};

#[derive(Parser)]
#[command(name = "vidlink", version, about = "Detect video links and build embed URLs")]
struct Args {
    /// Host name of the page that embeds the player (overrides settings)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the provider, video id and embed URL of each input
    Detect {
        /// Inputs to inspect; read from stdin when empty
        inputs: Vec<String>,
        /// Print JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
        /// Read the input from the clipboard
        #[arg(long)]
        clipboard: bool,
    },
    /// Exit successfully only if every input is a video link
    Check {
        inputs: Vec<String>,
        #[arg(long)]
        clipboard: bool,
    },
    /// List the active providers in match order
    Providers {
        #[arg(long)]
        json: bool,
    },
    /// Fetch oEmbed metadata for a video link
    Info { url: String },
    /// Print the effective settings
    Config {
        /// Write them (including --host) to the settings file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Serialize)]
struct DetectRecord<'a> {
    input: &'a str,
    #[serde(rename = "match")]
    matched: Option<VideoMatch<'a>>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let settings_path = args.config.clone().unwrap_or_else(utils::get_settings_path);
    let mut settings = Settings::load(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;
    if let Some(host) = args.host.as_deref() {
        settings.set_host(host)?;
    }

    match args.command {
        Command::Detect {
            inputs,
            json,
            clipboard,
        } => {
            let registry = ProviderRegistry::with_custom(&settings.custom_providers)?;
            let inputs = collect_inputs(inputs, clipboard)?;
            detect(&registry, &settings, &inputs, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { inputs, clipboard } => {
            let registry = ProviderRegistry::with_custom(&settings.custom_providers)?;
            let inputs = collect_inputs(inputs, clipboard)?;
            if !inputs.is_empty() && inputs.iter().all(|input| registry.is_video_url(input)) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Providers { json } => {
            let registry = ProviderRegistry::with_custom(&settings.custom_providers)?;
            list_providers(&registry, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Info { url } => {
            let resolver = EmbedResolver::from_settings(&settings)?;
            // Run the lookup inside a temporary Tokio runtime
            let rt = tokio::runtime::Runtime::new()?;
            let info = rt.block_on(resolver.resolve(&url));
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Config { save } => {
            // Compile configured providers first so a broken file is never written back
            ProviderRegistry::with_custom(&settings.custom_providers)?;
            if save {
                settings
                    .save(&settings_path)
                    .with_context(|| format!("Failed to write {}", settings_path.display()))?;
                eprintln!("Saved settings to {}", settings_path.display());
            }
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Inputs from the clipboard, the command line, or stdin, in that order
fn collect_inputs(inputs: Vec<String>, clipboard: bool) -> Result<Vec<String>> {
    if clipboard {
        return Ok(vec![utils::get_clipboard_content()?]);
    }
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn detect(registry: &ProviderRegistry, settings: &Settings, inputs: &[String], json: bool) -> Result<()> {
    let context = settings.embed_context();

    if json {
        let records: Vec<DetectRecord<'_>> = inputs
            .iter()
            .map(|input| DetectRecord {
                input,
                matched: registry.detect(input, &context),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for input in inputs {
        match registry.detect(input, &context) {
            Some(m) => println!("{}\t{}\t{}", m.provider.key(), m.video_id, m.embed_url),
            None => println!("no match\t{}", input),
        }
    }
    Ok(())
}

fn list_providers(registry: &ProviderRegistry, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(registry.providers())?);
        return Ok(());
    }

    for provider in registry {
        println!(
            "{}\t{}\t{}",
            provider.key(),
            provider.name(),
            provider.embed_url()
        );
    }
    Ok(())
}
