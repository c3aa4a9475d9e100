use std::env;

use anyhow::{anyhow, Context, Result};
use personalitylab::workspace::{config_file_path, Workspace};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse()?;
    let mut workspace = Workspace::open()?;
    let config_path = config_file_path(&workspace.root);
    let mut changed = !config_path.exists();

    let ai = &mut workspace.config.ai;
    changed |= apply_override(&mut ai.analysis_model, args.analysis_model);
    changed |= apply_override(&mut ai.chat_model, args.chat_model);
    changed |= apply_override(&mut ai.endpoint, args.endpoint);
    if let Some(key) = args.api_key {
        let key = key.trim().to_string();
        let key = (!key.is_empty()).then_some(key);
        if ai.api_key != key {
            ai.api_key = key;
            changed = true;
        }
    }
    if args.no_demos && workspace.config.library.include_demos {
        workspace.config.library.include_demos = false;
        changed = true;
    }

    if changed {
        let path = workspace.save_config()?;
        println!("Personality lab settings recorded at {}", path.display());
    } else {
        println!("Personality lab settings already configured.");
    }

    if workspace.config.ai.resolve_api_key().is_none() {
        println!("No API key configured; relationship analysis stays disabled.");
    }

    Ok(())
}

#[derive(Default)]
struct CliArgs {
    api_key: Option<String>,
    analysis_model: Option<String>,
    chat_model: Option<String>,
    endpoint: Option<String>,
    no_demos: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut parsed = CliArgs::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-key" => {
                    let value = args.next().context("Expected a key after --api-key")?;
                    parsed.api_key = Some(value);
                }
                "--analysis-model" => {
                    let value = args
                        .next()
                        .context("Expected a model name after --analysis-model")?;
                    parsed.analysis_model = Some(value);
                }
                "--chat-model" => {
                    let value = args
                        .next()
                        .context("Expected a model name after --chat-model")?;
                    parsed.chat_model = Some(value);
                }
                "--endpoint" => {
                    let value = args.next().context("Expected a URL after --endpoint")?;
                    parsed.endpoint = Some(value);
                }
                "--no-demos" => parsed.no_demos = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(parsed)
    }
}

fn print_usage() {
    println!("Personality lab setup");
    println!("Records narrative provider settings in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --api-key <key>           Store the provider API key (empty string clears it)");
    println!("  --analysis-model <name>   Model used for relationship analysis");
    println!("  --chat-model <name>       Model used for follow-up chat");
    println!("  --endpoint <url>          Base URL of the Gemini REST API");
    println!("  --no-demos                Stop listing demo profiles in empty libraries");
}

fn apply_override(slot: &mut String, value: Option<String>) -> bool {
    match value {
        Some(value) if !value.trim().is_empty() && *slot != value => {
            *slot = value;
            true
        }
        _ => false,
    }
}
