use docgen_core::generate::prompts::parse_title_array;
use docgen_core::{
    ContentGenerator, DocType, GenerateError, GenerateResult, TextGenerator, FALLBACK_OUTLINE,
};
use std::cell::RefCell;

/// Scripted generator: answers each call from a queue and records the
/// prompts it was handed.
struct ScriptedGenerator {
    text_replies: RefCell<Vec<GenerateResult<String>>>,
    title_replies: RefCell<Vec<GenerateResult<Vec<String>>>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedGenerator {
    fn new() -> Self {
        Self {
            text_replies: RefCell::new(Vec::new()),
            title_replies: RefCell::new(Vec::new()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    fn push_text(self, reply: GenerateResult<String>) -> Self {
        self.text_replies.borrow_mut().insert(0, reply);
        self
    }

    fn push_titles(self, reply: GenerateResult<Vec<String>>) -> Self {
        self.title_replies.borrow_mut().insert(0, reply);
        self
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl TextGenerator for &ScriptedGenerator {
    fn generate_text(&self, prompt: &str) -> GenerateResult<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.text_replies
            .borrow_mut()
            .pop()
            .unwrap_or(Err(GenerateError::EmptyResponse))
    }

    fn generate_titles(&self, prompt: &str) -> GenerateResult<Vec<String>> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.title_replies
            .borrow_mut()
            .pop()
            .unwrap_or(Err(GenerateError::EmptyResponse))
    }
}

#[test]
fn outline_suggestion_returns_model_titles_in_order() {
    let scripted = ScriptedGenerator::new().push_titles(Ok(vec![
        "Market".to_string(),
        "Competition".to_string(),
        "Outlook".to_string(),
    ]));
    let generator = ContentGenerator::new(&scripted);

    let outline = generator.suggest_outline("ev market", DocType::Deck, Some(3));
    assert_eq!(outline, vec!["Market", "Competition", "Outlook"]);
    assert!(scripted.prompts()[0].contains("exactly 3 slide titles"));
}

#[test]
fn out_of_range_outline_counts_are_normalized_before_prompting() {
    let scripted = ScriptedGenerator::new()
        .push_titles(Ok(vec!["A".to_string()]))
        .push_titles(Ok(vec!["A".to_string()]));
    let generator = ContentGenerator::new(&scripted);

    generator.suggest_outline("ev market", DocType::Document, Some(500));
    generator.suggest_outline("ev market", DocType::Document, Some(0));

    let prompts = scripted.prompts();
    assert!(prompts[0].contains("exactly 50 section headers"));
    assert!(prompts[1].contains("exactly 8 section headers"));
}

#[test]
fn outline_failure_falls_back_to_the_fixed_outline() {
    let scripted = ScriptedGenerator::new().push_titles(Err(GenerateError::Backend {
        status: 429,
        message: "quota".to_string(),
    }));
    let generator = ContentGenerator::new(&scripted);

    let outline = generator.suggest_outline("ev market", DocType::Document, None);
    assert_eq!(
        outline,
        vec!["Introduction", "Overview", "Key Points", "Conclusion"]
    );
    assert_eq!(outline, FALLBACK_OUTLINE.to_vec());
}

#[test]
fn draft_failure_surfaces_as_message_text() {
    let scripted = ScriptedGenerator::new().push_text(Err(GenerateError::NotConfigured));
    let generator = ContentGenerator::new(&scripted);

    let content = generator.draft_section("ev market", "Trends", DocType::Document, None);
    assert_eq!(
        content,
        "Error generating content. Please check your API key and network connection."
    );
}

#[test]
fn empty_draft_surfaces_as_failure_text() {
    let scripted = ScriptedGenerator::new().push_text(Ok("   \n  ".to_string()));
    let generator = ContentGenerator::new(&scripted);

    let content = generator.draft_section("ev market", "Trends", DocType::Deck, None);
    assert_eq!(content, "Failed to generate content.");
}

#[test]
fn draft_prompt_carries_the_continuity_context() {
    let scripted = ScriptedGenerator::new().push_text(Ok("body".to_string()));
    let generator = ContentGenerator::new(&scripted);

    generator.draft_section(
        "ev market",
        "Outlook",
        DocType::Document,
        Some("Market: growth is steady..."),
    );
    let prompt = scripted.prompts().remove(0);
    assert!(prompt.contains("Context from previous sections"));
    assert!(prompt.contains("Market: growth is steady..."));
}

#[test]
fn refine_failure_leaves_content_unchanged() {
    let scripted = ScriptedGenerator::new().push_text(Err(GenerateError::EmptyResponse));
    let generator = ContentGenerator::new(&scripted);

    let refined = generator.refine("original body", "make it shorter", DocType::Document);
    assert_eq!(refined, "original body");
}

#[test]
fn refine_success_replaces_content_with_trimmed_result() {
    let scripted = ScriptedGenerator::new().push_text(Ok("  tightened body  ".to_string()));
    let generator = ContentGenerator::new(&scripted);

    let refined = generator.refine("original body", "make it shorter", DocType::Deck);
    assert_eq!(refined, "tightened body");
}

#[test]
fn structured_replies_survive_markdown_fencing() {
    let fenced = "```json\n[\"Intro\", \"Body\", \"Close\"]\n```";
    assert_eq!(
        parse_title_array(fenced),
        Some(vec![
            "Intro".to_string(),
            "Body".to_string(),
            "Close".to_string()
        ])
    );
    assert!(parse_title_array("the model rambled instead").is_none());
}
