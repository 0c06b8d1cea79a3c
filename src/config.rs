//! Configuration for the LLM Council
//!
//! The settings the rest of the application consumes: the council roster,
//! the chairman model, the API endpoint, and the conversation data
//! directory. Only the credential is environment-derived, optionally seeded
//! from a local `.env` file; everything else is fixed at authoring time.

use std::collections::HashMap;
use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;

/// Environment variable supplying the Tuzi API key
pub const API_KEY_ENV: &str = "TUZI_API_KEY";

/// Conventional env file location, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tuzi API key; absent when the environment does not provide one
    pub api_key: Option<String>,

    /// Council members - model identifiers, in invocation order
    pub council_models: Vec<String>,

    /// Chairman model - synthesizes the final response
    pub chairman_model: String,

    /// Tuzi API endpoint (OpenAI compatible)
    pub api_url: String,

    /// Directory for conversation storage
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            council_models: vec![
                "gpt-5.1".to_string(),
                "gemini-3-pro-preview".to_string(),
                "claude-opus-4-5-20251101".to_string(),
                "grok-4.1".to_string(),
            ],
            chairman_model: "gemini-3-pro-preview".to_string(),
            api_url: "https://api.tu-zi.com/v1/chat/completions".to_string(),
            data_dir: PathBuf::from("data/conversations"),
        }
    }
}

impl Config {
    /// Load config from the process environment, seeded from an env file
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let path = env_file.unwrap_or(Path::new(DEFAULT_ENV_FILE));
        let file_vars = load_env_file(path)?;
        let process_env: HashMap<String, String> = env::vars().collect();
        Ok(Self::resolve(&process_env, &file_vars))
    }

    /// Build the configuration from explicit environment snapshots.
    ///
    /// Values already present in the process environment win over env-file
    /// values.
    pub fn resolve(
        process_env: &HashMap<String, String>,
        file_vars: &HashMap<String, String>,
    ) -> Self {
        let api_key = process_env
            .get(API_KEY_ENV)
            .or_else(|| file_vars.get(API_KEY_ENV))
            .cloned();

        let config = Self {
            api_key,
            ..Self::default()
        };

        // Not enforced, but the chairman is expected to sit on the council
        // it synthesizes for.
        if !config.council_models.contains(&config.chairman_model) {
            warn!(
                chairman = %config.chairman_model,
                "chairman model is not a council member"
            );
        }

        config
    }
}

/// Parse an env-definition file into a key/value map.
///
/// A missing file is not an error; loading proceeds with an empty map.
/// Parse failures surface as-is from the underlying parser.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
            return Ok(HashMap::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    Ok(vars)
}
