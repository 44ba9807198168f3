//! Terminal chat demo for the ResuMate conversation engine.
//!
//! Wires the handlers to in-memory stores and, when an OpenAI key is
//! configured, to the real generation service. Without a key the mock
//! generator fails every call and the conversation runs entirely on the
//! static fallback script, which makes the demo usable offline.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use resumate::adapters::ai::{MockTextGenerator, OpenAiConfig, OpenAiGenerator};
use resumate::adapters::memory::{InMemoryChatStore, InMemoryResumeStore};
use resumate::application::{ManageResumeHandler, ProcessMessageHandler, ResumeStatusHandler};
use resumate::config::AppConfig;
use resumate::domain::engine::ConversationOrchestrator;
use resumate::ports::{ChatRepository, ResumeRepository, TextGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let generator: Arc<dyn TextGenerator> = if config.ai.has_api_key() {
        let openai = OpenAiConfig::new(config.ai.openai_api_key.clone().unwrap_or_default())
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout());
        tracing::info!(model = %config.ai.model, "using OpenAI generation");
        Arc::new(OpenAiGenerator::new(openai)?)
    } else {
        tracing::warn!("no API key configured, running on static fallback text");
        Arc::new(MockTextGenerator::new())
    };

    let resumes: Arc<dyn ResumeRepository> = Arc::new(InMemoryResumeStore::new());
    let chats: Arc<dyn ChatRepository> = Arc::new(InMemoryChatStore::new());

    let manage = ManageResumeHandler::new(Arc::clone(&resumes), Arc::clone(&chats));
    let status = ResumeStatusHandler::new(Arc::clone(&resumes));
    let turns = ProcessMessageHandler::new(
        Arc::clone(&resumes),
        Arc::clone(&chats),
        ConversationOrchestrator::new(generator),
    );

    let resume = manage.create("My Resume").await?;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(b"ResuMate - type your answers, Ctrl-D to quit.\n\nyou> ")
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let response = turns.handle(resume.id, line.trim()).await;

        let reply = match (&response.bot_message, &response.error) {
            (Some(bot), _) => bot.content.clone(),
            (None, Some(error)) => format!("error: {error}"),
            (None, None) => String::new(),
        };
        stdout.write_all(format!("\nbot> {reply}\n").as_bytes()).await?;

        if response.show_complete_resume {
            let report = status.handle(resume.id).await;
            if let Some(text) = report.formatted_resume {
                stdout.write_all(format!("\n{text}\n").as_bytes()).await?;
            }
            break;
        }

        stdout.write_all(b"\nyou> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
