use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Which `ResumeParser` backend to wire into the app state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserBackend {
    Fixture,
    Failing,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub parser_backend: ParserBackend,
    pub parse_timeout: Duration,
    pub max_sessions: usize,
    /// Sessions untouched for this long are dropped when a new one is opened.
    pub session_idle: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let parse_timeout_secs = lookup("PARSE_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("PARSE_TIMEOUT_SECS must be a whole number of seconds")?;

        let max_sessions = lookup("MAX_SESSIONS")
            .unwrap_or_else(|| "1000".to_string())
            .parse::<usize>()
            .context("MAX_SESSIONS must be a positive integer")?;
        if max_sessions == 0 {
            bail!("MAX_SESSIONS must be a positive integer, got 0");
        }

        let session_idle_secs = lookup("SESSION_IDLE_SECS")
            .unwrap_or_else(|| "7200".to_string())
            .parse::<u64>()
            .context("SESSION_IDLE_SECS must be a whole number of seconds")?;
        if session_idle_secs == 0 {
            bail!("SESSION_IDLE_SECS must be at least 1");
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            parser_backend: parse_backend(
                &lookup("RESUME_PARSER").unwrap_or_else(|| "fixture".to_string()),
            )?,
            parse_timeout: Duration::from_secs(parse_timeout_secs),
            max_sessions,
            session_idle: Duration::from_secs(session_idle_secs),
        })
    }
}

fn parse_backend(raw: &str) -> Result<ParserBackend> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "fixture" => Ok(ParserBackend::Fixture),
        "failing" => Ok(ParserBackend::Failing),
        other => bail!("RESUME_PARSER must be 'fixture' or 'failing', got '{other}'"),
    }
}
