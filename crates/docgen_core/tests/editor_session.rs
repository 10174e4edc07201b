use docgen_core::{
    ContentGenerator, DocType, EditorError, EditorService, Feedback, GenerateError,
    GenerateResult, MemoryStore, Project, ProjectStore, SectionStatus, TextGenerator,
};
use uuid::Uuid;

struct FixedGenerator {
    text: GenerateResult<String>,
}

impl FixedGenerator {
    fn ok(text: &str) -> Self {
        Self {
            text: Ok(text.to_string()),
        }
    }

    fn failing() -> Self {
        Self {
            text: Err(GenerateError::EmptyResponse),
        }
    }
}

impl TextGenerator for FixedGenerator {
    fn generate_text(&self, _prompt: &str) -> GenerateResult<String> {
        match &self.text {
            Ok(text) => Ok(text.clone()),
            Err(_) => Err(GenerateError::EmptyResponse),
        }
    }

    fn generate_titles(&self, _prompt: &str) -> GenerateResult<Vec<String>> {
        Err(GenerateError::EmptyResponse)
    }
}

fn seeded_project(store: &MemoryStore, titles: &[&str]) -> Project {
    let project = Project::from_outline(
        Uuid::new_v4(),
        "Plan",
        "ev market",
        DocType::Document,
        titles.iter().map(|title| title.to_string()).collect(),
    );
    store.create_project(&project).unwrap();
    project
}

fn service(
    store: &MemoryStore,
    generator: FixedGenerator,
) -> EditorService<&MemoryStore, FixedGenerator> {
    EditorService::new(store, ContentGenerator::new(generator))
}

#[test]
fn opening_selects_the_first_section() {
    let store = MemoryStore::new();
    let project = seeded_project(&store, &["Intro", "Body"]);
    let service = service(&store, FixedGenerator::ok("text"));

    let session = service.open(project.id).unwrap();
    assert_eq!(session.active_section_id(), Some(project.sections[0].id));
    assert_eq!(session.active_section().unwrap().title, "Intro");
}

#[test]
fn opening_a_missing_project_fails() {
    let store = MemoryStore::new();
    let service = service(&store, FixedGenerator::ok("text"));
    let err = service.open(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, EditorError::ProjectNotFound(_)));
}

#[test]
fn drafting_completes_the_section_and_flushes_to_the_store() {
    let store = MemoryStore::new();
    let project = seeded_project(&store, &["Intro"]);
    let service = service(&store, FixedGenerator::ok("drafted body"));

    let mut session = service.open(project.id).unwrap();
    service.draft_active(&mut session).unwrap();

    let active = session.active_section().unwrap();
    assert_eq!(active.content, "drafted body");
    assert_eq!(active.status, SectionStatus::Completed);

    let stored = store.get_project(project.id).unwrap().unwrap();
    assert_eq!(stored.sections[0].content, "drafted body");
    assert_eq!(stored.sections[0].status, SectionStatus::Completed);
}

#[test]
fn drafting_failure_writes_the_error_text_and_still_completes() {
    let store = MemoryStore::new();
    let project = seeded_project(&store, &["Intro"]);
    let service = service(&store, FixedGenerator::failing());

    let mut session = service.open(project.id).unwrap();
    service.draft_active(&mut session).unwrap();

    let active = session.active_section().unwrap();
    assert!(active.content.starts_with("Error generating content."));
    assert_eq!(active.status, SectionStatus::Completed);
}

#[test]
fn refine_failure_leaves_the_content_unchanged() {
    let store = MemoryStore::new();
    let mut project = seeded_project(&store, &["Intro"]);
    project.sections[0].content = "original body".to_string();
    store.update_project(&project).unwrap();
    let service = service(&store, FixedGenerator::failing());

    let mut session = service.open(project.id).unwrap();
    service.refine_active(&mut session, "make it formal").unwrap();

    let active = session.active_section().unwrap();
    assert_eq!(active.content, "original body");
    assert_eq!(active.status, SectionStatus::Refining);
}

#[test]
fn refine_replaces_content_and_marks_the_section_refining() {
    let store = MemoryStore::new();
    let mut project = seeded_project(&store, &["Intro"]);
    project.sections[0].content = "original body".to_string();
    store.update_project(&project).unwrap();
    let service = service(&store, FixedGenerator::ok("polished body"));

    let mut session = service.open(project.id).unwrap();
    service.refine_active(&mut session, "polish it").unwrap();

    assert_eq!(session.active_section().unwrap().content, "polished body");
    let stored = store.get_project(project.id).unwrap().unwrap();
    assert_eq!(stored.sections[0].status, SectionStatus::Refining);
}

#[test]
fn blank_refine_instruction_is_rejected() {
    let store = MemoryStore::new();
    let project = seeded_project(&store, &["Intro"]);
    let service = service(&store, FixedGenerator::ok("text"));

    let mut session = service.open(project.id).unwrap();
    let err = service.refine_active(&mut session, "   ").unwrap_err();
    assert!(matches!(err, EditorError::EmptyInstruction));
}

#[test]
fn feedback_toggles_on_and_off() {
    let store = MemoryStore::new();
    let project = seeded_project(&store, &["Intro"]);
    let service = service(&store, FixedGenerator::ok("text"));

    let mut session = service.open(project.id).unwrap();
    service.toggle_feedback(&mut session, Feedback::Like).unwrap();
    assert_eq!(session.active_section().unwrap().feedback, Some(Feedback::Like));

    service.toggle_feedback(&mut session, Feedback::Dislike).unwrap();
    assert_eq!(
        session.active_section().unwrap().feedback,
        Some(Feedback::Dislike)
    );

    // Same value again clears it.
    service.toggle_feedback(&mut session, Feedback::Dislike).unwrap();
    assert_eq!(session.active_section().unwrap().feedback, None);
}

#[test]
fn comments_append_and_blank_comments_are_rejected() {
    let store = MemoryStore::new();
    let project = seeded_project(&store, &["Intro"]);
    let service = service(&store, FixedGenerator::ok("text"));

    let mut session = service.open(project.id).unwrap();
    service.add_comment(&mut session, "needs a chart").unwrap();
    service.add_comment(&mut session, "cite sources").unwrap();

    let err = service.add_comment(&mut session, "  ").unwrap_err();
    assert!(matches!(err, EditorError::EmptyComment));

    let stored = store.get_project(project.id).unwrap().unwrap();
    let comments: Vec<&str> = stored.sections[0]
        .comments
        .iter()
        .map(|comment| comment.text.as_str())
        .collect();
    assert_eq!(comments, vec!["needs a chart", "cite sources"]);
}

#[test]
fn reordering_persists_and_keeps_section_ids_stable() {
    let store = MemoryStore::new();
    let project = seeded_project(&store, &["A", "B", "C"]);
    let ids: Vec<_> = project.sections.iter().map(|section| section.id).collect();
    let service = service(&store, FixedGenerator::ok("text"));

    let mut session = service.open(project.id).unwrap();
    service.move_section(&mut session, 0, 2);

    let stored = store.get_project(project.id).unwrap().unwrap();
    let titles: Vec<&str> = stored
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(titles, vec!["B", "C", "A"]);
    assert_eq!(stored.sections[2].id, ids[0]);
}

#[test]
fn keystroke_edits_stay_local_until_saved() {
    let store = MemoryStore::new();
    let project = seeded_project(&store, &["Intro"]);
    let service = service(&store, FixedGenerator::ok("text"));

    let mut session = service.open(project.id).unwrap();
    session.edit_content("hand-written body").unwrap();

    let stored = store.get_project(project.id).unwrap().unwrap();
    assert_eq!(stored.sections[0].content, "");

    service.save(&mut session);
    let stored = store.get_project(project.id).unwrap().unwrap();
    assert_eq!(stored.sections[0].content, "hand-written body");
}

#[test]
fn selecting_a_foreign_section_id_fails() {
    let store = MemoryStore::new();
    let project = seeded_project(&store, &["Intro"]);
    let service = service(&store, FixedGenerator::ok("text"));

    let mut session = service.open(project.id).unwrap();
    let err = session.select_section(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, EditorError::SectionNotFound(_)));
}
