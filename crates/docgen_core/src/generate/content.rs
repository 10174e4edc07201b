//! Content operations with their degradation contracts.
//!
//! # Responsibility
//! - Expose the three generation operations used by the wizard and the
//!   section editor: outline suggestion, section drafting, refinement.
//!
//! # Invariants
//! - None of the operations returns an error to the caller:
//!   - outline failure yields the fixed fallback outline;
//!   - drafting failure yields a literal error message as content;
//!   - refinement failure yields the original content unchanged.

use crate::generate::prompts::{
    clamp_outline_count, outline_prompt, refine_prompt, section_prompt, FALLBACK_OUTLINE,
};
use crate::generate::TextGenerator;
use crate::model::project::DocType;
use log::warn;

/// Content returned when drafting produced an empty answer.
pub const EMPTY_DRAFT_TEXT: &str = "Failed to generate content.";
/// Content returned when the drafting call itself failed.
pub const DRAFT_ERROR_TEXT: &str =
    "Error generating content. Please check your API key and network connection.";

/// Facade running the generation operations over any [`TextGenerator`].
pub struct ContentGenerator<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> ContentGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Suggests an ordered outline for a topic.
    ///
    /// A requested count is clamped to the supported range first.
    /// Falls back to [`FALLBACK_OUTLINE`] on any failure.
    pub fn suggest_outline(
        &self,
        topic: &str,
        doc_type: DocType,
        count: Option<u32>,
    ) -> Vec<String> {
        let prompt = outline_prompt(topic, doc_type, count.map(clamp_outline_count));
        match self.generator.generate_titles(&prompt) {
            Ok(titles) => titles,
            Err(err) => {
                warn!("event=outline_suggest module=generate status=fallback error={err}");
                FALLBACK_OUTLINE.iter().map(|title| title.to_string()).collect()
            }
        }
    }

    /// Drafts body content for one section.
    ///
    /// On failure the returned string is a literal error message; no
    /// error propagates to the caller.
    pub fn draft_section(
        &self,
        topic: &str,
        section_title: &str,
        doc_type: DocType,
        context: Option<&str>,
    ) -> String {
        let prompt = section_prompt(topic, section_title, doc_type, context);
        match self.generator.generate_text(&prompt) {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    EMPTY_DRAFT_TEXT.to_string()
                } else {
                    trimmed.to_string()
                }
            }
            Err(err) => {
                warn!("event=section_draft module=generate status=error error={err}");
                DRAFT_ERROR_TEXT.to_string()
            }
        }
    }

    /// Rewrites content per a free-text instruction.
    ///
    /// Fails open: any failure returns `current_content` unchanged.
    pub fn refine(&self, current_content: &str, instruction: &str, doc_type: DocType) -> String {
        let prompt = refine_prompt(current_content, instruction, doc_type);
        match self.generator.generate_text(&prompt) {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    current_content.to_string()
                } else {
                    trimmed.to_string()
                }
            }
            Err(err) => {
                warn!("event=section_refine module=generate status=unchanged error={err}");
                current_content.to_string()
            }
        }
    }
}
