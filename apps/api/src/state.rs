use std::sync::Arc;

use crate::config::{Config, ParserBackend};
use crate::editor::{IdGenerator, UuidIdGenerator};
use crate::parsing::{FailingParser, FixtureParser, ResumeParser};
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable parser. Default: FixtureParser. Swap via RESUME_PARSER.
    pub parser: Arc<dyn ResumeParser>,
    /// Mints item ids for `AddItem` actions.
    pub ids: Arc<dyn IdGenerator>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let parser: Arc<dyn ResumeParser> = match config.parser_backend {
            ParserBackend::Fixture => Arc::new(FixtureParser),
            ParserBackend::Failing => Arc::new(FailingParser::new(
                "document extraction is unavailable",
            )),
        };

        Self {
            sessions: SessionStore::new(config.max_sessions, config.session_idle),
            config,
            parser,
            ids: Arc::new(UuidIdGenerator),
        }
    }
}
