mod config;
mod errors;
mod generation;
mod keywords;
mod model_client;
mod suggest;
mod tips;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::catalog::{Platform, Tone};
use crate::generation::generator::{generate_captions, GenerationRequest, GenerationResult};
use crate::keywords::extract::extract_keywords_from_caption;
use crate::model_client::handle::model_handle;
use crate::model_client::TextGenerator;
use crate::suggest::emojis::suggest_emojis;
use crate::suggest::hashtags::suggest_hashtags;
use crate::tips::{optimal_posting_time, platform_tips};

#[derive(Parser, Debug)]
#[command(
    name = "captioner",
    version,
    about = "Generate social-media captions, hashtags, and emoji suggestions \
             tuned per platform and tone"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate captions, hashtags, and emojis for a topic
    Generate {
        /// Keywords or theme describing the post (e.g. "morning coffee")
        keywords: String,

        /// Target platform: instagram, twitter, linkedin, facebook
        #[arg(long, default_value = "instagram")]
        platform: String,

        /// Caption tone: casual, professional, inspirational, humorous,
        /// educational
        #[arg(long, default_value = "casual")]
        tone: String,

        /// Number of caption variations (1-3)
        #[arg(long, default_value_t = 1)]
        count: u8,

        /// Skip the appended call-to-action phrase
        #[arg(long)]
        no_cta: bool,

        /// Emit the result as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Extract candidate keywords from an existing caption
    Analyze {
        /// The caption text to analyze
        caption: String,
    },
    /// Show engagement tips and posting times for a platform
    Tips {
        /// Target platform: instagram, twitter, linkedin, facebook
        platform: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging (stderr, so it never mixes with output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            keywords,
            platform,
            tone,
            count,
            no_cta,
            json,
        } => run_generate(&config, &keywords, &platform, &tone, count, !no_cta, json).await?,
        Command::Analyze { caption } => run_analyze(&caption)?,
        Command::Tips { platform } => run_tips(&platform),
    }

    Ok(())
}

/// Assembles the full displayed result: captions, hashtags, and emojis are
/// produced independently and combined here.
async fn run_generate(
    config: &Config,
    keywords: &str,
    platform: &str,
    tone: &str,
    count: u8,
    include_cta: bool,
    json: bool,
) -> Result<(), AppError> {
    if keywords.trim().is_empty() {
        return Err(AppError::Validation(
            "Keywords must not be blank. Describe what the post is about.".to_string(),
        ));
    }

    let platform = Platform::parse(platform);
    let tone = Tone::parse(tone);
    let model = model_handle(config).map(|client| client as &dyn TextGenerator);

    let request = GenerationRequest {
        keywords: keywords.to_string(),
        platform,
        tone,
        include_cta,
        num_captions: count,
    };

    let captions = generate_captions(model, &request).await;
    let hashtags = suggest_hashtags(keywords, platform);
    let emojis = suggest_emojis(keywords, platform);

    let result = GenerationResult {
        platform,
        captions,
        hashtags,
        emojis,
    };

    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize result: {e}")))?;
        println!("{rendered}");
    } else {
        print_result(&result);
    }
    Ok(())
}

fn print_result(result: &GenerationResult) {
    for (i, variant) in result.captions.iter().enumerate() {
        if result.captions.len() > 1 {
            println!("Caption option {}:", i + 1);
        } else {
            println!("Caption:");
        }
        println!("  {}", variant.text);
        println!("  [{}]", variant.length);
        println!();
    }

    println!("Hashtags:");
    println!("  {}", result.hashtags.join(" "));
    println!();
    println!("Emojis:");
    println!("  {}", result.emojis.join(" "));

    if let Some(first) = result.captions.first() {
        println!();
        println!("Complete post preview:");
        println!("{}", first.text);
        println!();
        println!("{} {}", result.hashtags.join(" "), result.emojis.join(" "));
    }
}

fn run_analyze(caption: &str) -> Result<(), AppError> {
    if caption.trim().is_empty() {
        return Err(AppError::Validation(
            "Caption must not be blank.".to_string(),
        ));
    }

    let keywords = extract_keywords_from_caption(caption);
    if keywords.is_empty() {
        println!("No keywords found.");
    } else {
        println!("Keywords: {}", keywords.join(", "));
    }
    Ok(())
}

fn run_tips(platform: &str) {
    let platform = Platform::parse(platform);
    println!("{} tips:", platform.as_str());
    for tip in platform_tips(platform) {
        println!("  - {tip}");
    }
    println!();
    println!("Best posting times: {}", optimal_posting_time(platform));
}
