//! Core domain logic for the AI-assisted document/deck generator.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod export;
pub mod generate;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{GeneratorConfig, StoreConfig, DEFAULT_GENERATION_MODEL};
pub use export::deck::{deck_plan, ContentSlide, DeckPlan, TitleSlide};
pub use export::document::{document_plan, DocBlock, DocumentPlan};
pub use export::{export_extension, export_file_name};
pub use generate::content::ContentGenerator;
pub use generate::http::HttpTextGenerator;
pub use generate::prompts::{clamp_outline_count, FALLBACK_OUTLINE};
pub use generate::{GenerateError, GenerateResult, TextGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    Comment, DocType, Feedback, Project, ProjectId, Section, SectionId, SectionStatus,
};
pub use model::user::{User, UserId, UserRecord};
pub use service::account_service::{AccountError, AccountService};
pub use service::editor_service::{EditorError, EditorService, EditorSession};
pub use service::project_service::ProjectService;
pub use store::http::HttpStore;
pub use store::memory::MemoryStore;
pub use store::session::SessionFile;
pub use store::{ProjectStore, StoreError, StoreResult, UserStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
