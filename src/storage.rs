//! Conversation storage
//!
//! Conversations persist as one JSON file each under the configured data
//! directory. Summaries carry what the sidebar needs; full records carry
//! the message history.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CouncilError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// A full conversation record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

/// Listing shape: everything needed to render a conversation row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub message_count: usize,
}

impl Conversation {
    fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            created_at: self.created_at,
            message_count: self.messages.len(),
        }
    }
}

/// File-based store for conversation records
pub struct ConversationStore {
    data_dir: PathBuf,
}

impl ConversationStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create the data directory if it does not exist yet
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Start a new, empty conversation and persist it
    pub fn create(&self) -> Result<Conversation> {
        let conversation = Conversation {
            id: Uuid::new_v4().to_string(),
            title: None,
            created_at: Utc::now(),
            messages: Vec::new(),
        };
        self.save(&conversation)?;
        debug!(id = %conversation.id, "created conversation");
        Ok(conversation)
    }

    /// Summaries of all stored conversations, newest first.
    ///
    /// Files that are not readable conversation records are skipped.
    pub fn list(&self) -> Result<Vec<ConversationSummary>> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut summaries = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            match serde_json::from_str::<Conversation>(&content) {
                Ok(conversation) => summaries.push(conversation.summary()),
                Err(e) => debug!(path = %path.display(), error = %e, "skipping unreadable record"),
            }
        }

        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    /// Load a full conversation record
    pub fn get(&self, id: &str) -> Result<Conversation> {
        let path = self
            .conversation_path(id)
            .ok_or_else(|| CouncilError::ConversationNotFound(id.to_string()))?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CouncilError::ConversationNotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist a conversation record
    pub fn save(&self, conversation: &Conversation) -> Result<()> {
        self.init()?;
        let path = self
            .conversation_path(&conversation.id)
            .ok_or_else(|| CouncilError::ConversationNotFound(conversation.id.clone()))?;
        let content = serde_json::to_string_pretty(conversation)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Append a message to an existing conversation
    pub fn append_message(&self, id: &str, message: Message) -> Result<Conversation> {
        let mut conversation = self.get(id)?;
        conversation.messages.push(message);
        self.save(&conversation)?;
        Ok(conversation)
    }

    /// Set a conversation's title
    pub fn set_title(&self, id: &str, title: &str) -> Result<Conversation> {
        let mut conversation = self.get(id)?;
        conversation.title = Some(title.to_string());
        self.save(&conversation)?;
        Ok(conversation)
    }

    /// Remove a conversation record
    pub fn delete(&self, id: &str) -> Result<()> {
        let path = self
            .conversation_path(id)
            .ok_or_else(|| CouncilError::ConversationNotFound(id.to_string()))?;
        match fs::remove_file(path) {
            Ok(()) => {
                debug!(id, "deleted conversation");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CouncilError::ConversationNotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Record path for an id; ids that would escape the data directory
    /// resolve to nothing.
    fn conversation_path(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
            return None;
        }
        Some(self.data_dir.join(format!("{}.json", id)))
    }
}
