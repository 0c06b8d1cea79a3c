//! LLM Council - configuration and conversation storage
//!
//! Loads the council configuration from the process environment (optionally
//! seeded from a `.env` file) and manages the conversation records stored
//! under the data directory.

mod config;
mod error;
mod storage;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use storage::{Conversation, ConversationStore, Message, Role};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Env file to seed the environment from (default: .env)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Override the conversation data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effective configuration
    Config,
    /// List conversations, newest first
    List,
    /// Create a new conversation
    New,
    /// Show a conversation
    Show { id: String },
    /// Append a user message to a conversation
    Say { id: String, content: String },
    /// Delete a conversation
    Delete { id: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::load(args.env_file.as_deref())?;
    let data_dir = args.data_dir.unwrap_or_else(|| config.data_dir.clone());
    let store = ConversationStore::new(data_dir);

    match args.command {
        Command::Config => print_config(&config),
        Command::List => {
            let summaries = store.list()?;
            if summaries.is_empty() {
                println!("No conversations yet");
            }
            for summary in summaries {
                println!(
                    "{}  {}  {} messages  {}",
                    summary.id,
                    summary.created_at.format("%Y-%m-%d %H:%M"),
                    summary.message_count,
                    summary.title.as_deref().unwrap_or("New Conversation"),
                );
            }
        }
        Command::New => {
            let conversation = store.create()?;
            println!("{}", conversation.id);
        }
        Command::Show { id } => print_conversation(&store.get(&id)?),
        Command::Say { id, content } => {
            store.append_message(
                &id,
                Message {
                    role: Role::User,
                    content,
                },
            )?;
        }
        Command::Delete { id } => store.delete(&id)?,
    }

    Ok(())
}

fn print_config(config: &Config) {
    println!(
        "api_key: {}",
        if config.api_key.is_some() { "set" } else { "unset" }
    );
    println!("council_models: {}", config.council_models.join(", "));
    println!("chairman_model: {}", config.chairman_model);
    println!("api_url: {}", config.api_url);
    println!("data_dir: {}", config.data_dir.display());
}

fn print_conversation(conversation: &Conversation) {
    println!(
        "{}  created {}",
        conversation.title.as_deref().unwrap_or("New Conversation"),
        conversation.created_at.format("%Y-%m-%d %H:%M"),
    );
    for message in &conversation.messages {
        let role = match message.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        println!("[{}] {}", role, message.content);
    }
}
