//! Prompt construction and response parsing helpers.
//!
//! # Responsibility
//! - Build the outline/draft/refine prompts for both output families.
//! - Decode structured (string-array) responses, tolerating markdown
//!   code fences around the JSON payload.
//!
//! # Invariants
//! - Prompts forbid markdown in the generated body text; documents get
//!   prose instructions, decks get dash-bullet instructions.

use crate::model::project::DocType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Outline returned when suggestion fails for any reason.
pub const FALLBACK_OUTLINE: [&str; 4] = ["Introduction", "Overview", "Key Points", "Conclusion"];

const MIN_OUTLINE_ITEMS: u32 = 1;
const MAX_OUTLINE_ITEMS: u32 = 50;
const INVALID_COUNT_FALLBACK: u32 = 8;

/// Clamps a requested outline size to the supported range.
///
/// Zero (the unusable input) falls back to the wizard's default size
/// rather than the minimum.
pub fn clamp_outline_count(requested: u32) -> u32 {
    if requested < MIN_OUTLINE_ITEMS {
        INVALID_COUNT_FALLBACK
    } else if requested > MAX_OUTLINE_ITEMS {
        MAX_OUTLINE_ITEMS
    } else {
        requested
    }
}

static CODE_FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*(.*?)\s*```\s*$").expect("valid code fence regex")
});

/// Builds the outline-suggestion prompt.
///
/// With a desired count the model is asked for exactly that many items;
/// without one it may pick 5-8.
pub fn outline_prompt(topic: &str, doc_type: DocType, count: Option<u32>) -> String {
    let item_kind = match doc_type {
        DocType::Document => "section headers",
        DocType::Deck => "slide titles",
    };
    let artifact = match doc_type {
        DocType::Document => "word-processor document",
        DocType::Deck => "slide presentation",
    };
    let count_instruction = match count {
        Some(count) => format!("Return a list of exactly {count} {item_kind}."),
        None => format!("Return a list of 5-8 {item_kind}."),
    };

    format!(
        "Act as a professional document structurer.\n\
         Create a structured outline for a {artifact} about the following \
         topic: \"{topic}\".\n\n\
         {count_instruction}\n\
         The output must be a valid JSON array of strings."
    )
}

/// Builds the section-drafting prompt.
///
/// `context` carries excerpts of preceding sections for continuity.
pub fn section_prompt(
    topic: &str,
    section_title: &str,
    doc_type: DocType,
    context: Option<&str>,
) -> String {
    let (role, formatting) = match doc_type {
        DocType::Document => (
            "You are a professional business writer creating a formal report.",
            "- Write detailed professional prose in clear paragraphs.\n\
             - Elaborate on the concepts deeply.\n\
             - Do NOT use Markdown formatting (like **bold** or *italics*).\n\
             - Do NOT use Markdown headers.\n\
             - Use standard punctuation and capitalization.\n\
             - Do NOT include the section title in the output.",
        ),
        DocType::Deck => (
            "You are an expert presentation designer creating content for slide decks.",
            "- Write 4-6 concise bullet points.\n\
             - Start each point with a simple dash \"- \".\n\
             - Keep text punchy and impactful, suitable for a slide.\n\
             - Do NOT use Markdown formatting (like **bold** or *italics*).\n\
             - Do NOT use headers (##).\n\
             - Do NOT use slide-number prefixes.\n\
             - Do NOT include the slide title in the output.",
        ),
    };

    let context_block = context
        .filter(|context| !context.trim().is_empty())
        .map(|context| format!("Context from previous sections (for continuity):\n{context}\n\n"))
        .unwrap_or_default();

    format!(
        "{role}\n\n\
         Topic: {topic}\n\
         Current Section Title: {section_title}\n\n\
         {context_block}\
         Task: Write the body content for this section.\n\
         {formatting}\n\n\
         Return ONLY the content text."
    )
}

/// Builds the refinement prompt for existing content.
pub fn refine_prompt(current_content: &str, instruction: &str, doc_type: DocType) -> String {
    let constraints = match doc_type {
        DocType::Document => {
            "Maintain professional prose in paragraphs. No Markdown (** or *)."
        }
        DocType::Deck => {
            "Maintain a bullet-point format (using dashes '-'). Keep it concise. \
             No Markdown (** or *)."
        }
    };

    format!(
        "Original Content:\n\"{current_content}\"\n\n\
         User Refinement Instruction:\n\"{instruction}\"\n\n\
         Constraints:\n{constraints}\n\n\
         Task: Rewrite the content following the user's instruction and \
         constraints. Return only the plain text result."
    )
}

/// Decodes a JSON string-array response.
///
/// Accepts the raw array or the same array wrapped in a markdown code
/// fence. Blank items are dropped; an empty result is reported as `None`.
pub fn parse_title_array(raw: &str) -> Option<Vec<String>> {
    let payload = CODE_FENCE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1).map(|m| m.as_str()))
        .unwrap_or(raw);

    let titles: Vec<String> = serde_json::from_str::<Vec<String>>(payload.trim()).ok()?;
    let titles: Vec<String> = titles
        .into_iter()
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .collect();
    if titles.is_empty() {
        None
    } else {
        Some(titles)
    }
}
