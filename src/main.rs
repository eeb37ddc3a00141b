use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shot_prompt_compiler::adapter::AdaptOptions;
use shot_prompt_compiler::config::{AppConfig, CliConfig, FileConfig, ProviderKind};
use shot_prompt_compiler::metrics;
use shot_prompt_compiler::voice::{ArcType, DialogueScript, VoicePromptBuilder, VoiceProvider};
use shot_prompt_compiler::{PromptCompiler, ShotDescriptor, Vocabulary};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
#[command(name = "prompt-compiler", about = "Compile shot descriptions into model prompts")]
struct CliArgs {
    /// Path to a TOML config file. Values in the file override CLI flags.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// LLM backend used for expansion of complex shots.
    #[clap(long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Base URL of the LLM backend.
    #[clap(long)]
    pub provider_url: Option<String>,

    /// Model name for the LLM backend.
    #[clap(long)]
    pub model: Option<String>,

    /// Shell command printing the API key, run before each request.
    #[clap(long)]
    pub api_key_command: Option<String>,

    /// Maximum words in an expanded prompt.
    #[clap(long)]
    pub word_limit: Option<usize>,

    /// Disable the expansion cache.
    #[clap(long)]
    pub no_cache: bool,

    /// Print Prometheus metrics to stderr before exiting.
    #[clap(long)]
    pub print_metrics: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a shot descriptor JSON file for a model family.
    Compile {
        #[clap(value_parser = parse_path)]
        descriptor: PathBuf,

        /// Target model family (sd15, sdxl, flux, dalle3, ...).
        #[clap(long, default_value = "sdxl")]
        target: String,

        /// Token limit overriding the family profile.
        #[clap(long)]
        token_limit: Option<usize>,
    },
    /// Direct a dialogue JSON file for a TTS provider.
    Voice {
        #[clap(value_parser = parse_path)]
        dialogue: PathBuf,

        /// Emotional arc, overriding the one in the file.
        #[clap(long)]
        arc: Option<ArcType>,

        /// TTS provider (elevenlabs, openai, hume, generic).
        #[clap(long, default_value = "generic")]
        provider: String,

        /// Scene type for the ambient cue, overriding the file's scene mood.
        #[clap(long)]
        scene: Option<String>,
    },
    /// Convert text with pause markers to SSML.
    Ssml { text: String },
    /// Check that every configured LLM backend is reachable.
    Health,
}

impl CliArgs {
    fn cli_config(&self) -> CliConfig {
        CliConfig {
            provider: self.provider,
            provider_url: self.provider_url.clone(),
            model: self.model.clone(),
            api_key_command: self.api_key_command.clone(),
            word_limit: self.word_limit,
            no_cache: self.no_cache,
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse input file: {:?}", path))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.cli_config(), file_config)?;

    metrics::init_metrics();
    let vocab = Vocabulary::builtin();

    match &cli_args.command {
        Command::Compile {
            descriptor,
            target,
            token_limit,
        } => {
            let shot: ShotDescriptor = read_json(descriptor)?;
            let engine = app_config.build_engine(vocab);
            info!(
                providers = ?engine.provider_names(),
                "Compiling shot for {}...",
                target
            );
            let compiler = PromptCompiler::new(engine, app_config.build_adapter());
            let options = AdaptOptions {
                token_limit_override: *token_limit,
            };
            let compiled = compiler.compile_with(&shot, target, &options).await;
            print_json(&compiled)?;
        }
        Command::Voice {
            dialogue,
            arc,
            provider,
            scene,
        } => {
            let script: DialogueScript = read_json(dialogue)?;
            let builder = VoicePromptBuilder::new(vocab);
            let direction = builder.build_dialogue_direction_prompt(
                &script.segments,
                arc.or(script.arc),
                scene.as_deref().or(script.scene_mood.as_deref()),
                &VoiceProvider::from_key(provider),
            );
            print_json(&direction)?;
        }
        Command::Ssml { text } => {
            let builder = VoicePromptBuilder::new(vocab);
            println!("{}", builder.to_ssml(text));
            info!(
                "Estimated duration: {:.1}s",
                builder.estimate_pacing_duration(text)
            );
        }
        Command::Health => {
            let providers = app_config.build_providers();
            if providers.is_empty() {
                warn!("No LLM providers configured, complex shots will use templates");
            }
            let mut unhealthy = 0;
            for provider in &providers {
                match provider.health_check().await {
                    Ok(()) => info!(provider = %provider.name(), model = %provider.model(), "Provider reachable"),
                    Err(e) => {
                        unhealthy += 1;
                        error!(provider = %provider.name(), error = %e, "Provider unreachable");
                    }
                }
            }
            if unhealthy > 0 {
                bail!("{} of {} providers unreachable", unhealthy, providers.len());
            }
        }
    }

    if cli_args.print_metrics {
        eprintln!("{}", metrics::encode_metrics());
    }

    Ok(())
}
