//! ConnectWith CLI - personalized connection requests from blog posts
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for collecting inputs, rendering results and handling top-level errors.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use connectwith::{pipeline, Config, Extractor, GeminiClient, MessageType, Request};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::path::{Path, PathBuf};

/// Default file the generated message is saved to
const MESSAGE_FILE: &str = "linkedin_message.txt";

#[derive(Parser)]
#[command(name = "connectwith")]
#[command(author, version, about = "Generate personalized connection requests from blog posts", long_about = None)]
struct Cli {
    /// Blog post URL (prompted for when omitted)
    #[arg(long)]
    url: Option<String>,

    /// Author's name (prompted for when omitted)
    #[arg(long)]
    author: Option<String>,

    /// Message length
    #[arg(long, value_enum)]
    message_type: Option<MessageType>,

    /// Show the raw extracted article text and stop
    #[arg(long)]
    raw: bool,

    /// Where to save the generated message
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip saving the message to a file
    #[arg(long)]
    no_save: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let extractor = Extractor::new()?;

    if cli.raw {
        // Just show the extracted text, no LLM involved
        let url = input_or_prompt(cli.url, "Blog post URL")?;
        println!("Fetching: {url}");

        let text = extractor.extract(&url).await?;
        println!("\n{text}");
        println!("\n--- Extracted {} characters ---", text.chars().count());
        return Ok(());
    }

    // Fail fast on a missing API key before collecting the rest of the input
    let config = Config::load()?;
    let api_key = config.api_key()?;
    let client = GeminiClient::new(api_key, config.agent.model.as_str(), config.agent.temperature)?;

    let url = input_or_prompt(cli.url, "Blog post URL")?;
    let author = input_or_prompt(cli.author, "Author's name")?;
    let message_type = match cli.message_type {
        Some(message_type) => message_type,
        None => prompt_message_type()?,
    };

    let request = Request::new(url, author, message_type)?;

    println!("Fetching: {}", request.url());
    let output = pipeline::run(&request, &extractor, &client).await?;

    println!("\n{}", "📝 Key Insight".cyan().bold());
    println!("{}", output.summary);

    println!("\n{}", "💌 Connection Message".cyan().bold());
    println!("{}", output.message);
    println!(
        "({} characters, {} max)",
        output.message.chars().count(),
        request.message_type().max_chars()
    );

    if !cli.no_save {
        if let Some(path) = save_target(cli.output)? {
            save_message(&path, &output.message)?;
            println!("\n{} {}", "Saved:".green(), path.display());
        }
    }

    Ok(())
}

/// Use the flag value when given, otherwise ask interactively
fn input_or_prompt(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => {
            let value: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            Ok(value)
        }
    }
}

fn prompt_message_type() -> anyhow::Result<MessageType> {
    let labels = ["Short (≤200 chars)", "Standard (≤300 chars)"];
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Message length")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(match index {
        0 => MessageType::Short,
        _ => MessageType::Standard,
    })
}

/// Decide where to save the message, confirming interactively when no
/// explicit path was given. `None` means the user declined.
fn save_target(output: Option<PathBuf>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = output {
        return Ok(Some(path));
    }

    let save = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Save message to {MESSAGE_FILE}?"))
        .default(true)
        .interact()?;

    Ok(save.then(|| PathBuf::from(MESSAGE_FILE)))
}

fn save_message(path: &Path, message: &str) -> anyhow::Result<()> {
    pipeline::save_message(path, message)
        .with_context(|| format!("failed to write {}", path.display()))
}
