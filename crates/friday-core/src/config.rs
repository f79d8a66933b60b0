use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

const DEFAULT_PERSONA: &str = "You are Friday, a friendly and intelligent AI assistant similar to ChatGPT. Be helpful, clear, and natural.";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Typed configuration for the bot.
///
/// Everything comes from the process environment at startup; a `.env` file in
/// the working directory is honored but never overrides already-set vars.
#[derive(Clone, Debug)]
pub struct Config {
    // Core secrets
    pub telegram_token: String,
    pub groq_api_key: String,

    // Completion endpoint
    pub groq_api_base: String,
    pub groq_model: String,
    pub completion_timeout: Duration,

    // Conversation behavior
    pub persona_prompt: String,
    pub history_max_turns: usize,

    // Telegram limits
    pub telegram_safe_limit: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        // Required env vars
        let telegram_token = env_str("TELEGRAM_TOKEN").unwrap_or_default();
        let groq_api_key = env_str("GROQ_API_KEY").unwrap_or_default();

        if telegram_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_TOKEN environment variable is required".to_string(),
            ));
        }
        if groq_api_key.trim().is_empty() {
            return Err(Error::Config(
                "GROQ_API_KEY environment variable is required".to_string(),
            ));
        }

        // Completion endpoint
        let groq_api_base = env_str("GROQ_API_BASE")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let groq_model = env_str("GROQ_MODEL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let completion_timeout =
            Duration::from_millis(env_u64("COMPLETION_TIMEOUT_MS").unwrap_or(90_000));

        // Conversation behavior
        let persona_prompt = env_str("FRIDAY_PERSONA")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_PERSONA.to_string());
        let history_max_turns = env_usize("HISTORY_MAX_TURNS").unwrap_or(20);

        // Telegram message limits
        let telegram_safe_limit = env_usize("TELEGRAM_SAFE_LIMIT").unwrap_or(4000);

        Ok(Self {
            telegram_token,
            groq_api_key,
            groq_api_base,
            groq_model,
            completion_timeout,
            persona_prompt,
            history_max_turns,
            telegram_safe_limit,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let Some((key, val)) = parse_env_line(raw) else {
            continue;
        };
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

/// Parse one `.env` line into a key/value pair.
///
/// Comments and blank lines yield `None`; surrounding single or double quotes
/// on the value are stripped.
fn parse_env_line(raw: &str) -> Option<(String, String)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (k, v) = line.split_once('=')?;
    let key = k.trim();
    if key.is_empty() {
        return None;
    }

    let mut val = v.trim().to_string();
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        val = val[1..val.len() - 1].to_string();
    }

    Some((key.to_string(), val))
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| s.trim().parse::<usize>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
