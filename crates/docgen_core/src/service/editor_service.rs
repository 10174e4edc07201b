//! Section editor use-case service.
//!
//! # Responsibility
//! - Hold the in-memory copy of the open project and its active section.
//! - Run draft/refine over the generation layer and apply the result.
//! - Flush mutations back to the store after every committed change.
//!
//! # Invariants
//! - The in-memory project is updated first; the store flush follows and
//!   is fail-soft (a warning, not an error — last write wins later).
//! - Drafting context covers at most the two preceding sections, with
//!   each excerpt capped at 200 characters.
//! - Section order changes keep every section's identifier stable.

use crate::generate::content::ContentGenerator;
use crate::generate::TextGenerator;
use crate::model::project::{
    Comment, Feedback, Project, ProjectId, Section, SectionId, SectionStatus,
};
use crate::store::{ProjectStore, StoreError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of preceding sections carried as drafting context.
const CONTEXT_SECTIONS: usize = 2;
/// Character cap per context excerpt.
const CONTEXT_EXCERPT_CHARS: usize = 200;

/// Service error for editor use-cases.
#[derive(Debug)]
pub enum EditorError {
    /// Requested project does not exist.
    ProjectNotFound(ProjectId),
    /// No section is selected for a section-scoped operation.
    NoActiveSection,
    /// Selected section id is not part of the open project.
    SectionNotFound(SectionId),
    /// Refinement instruction is blank.
    EmptyInstruction,
    /// Comment text is blank.
    EmptyComment,
    /// Remote store failure while opening.
    Store(StoreError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::NoActiveSection => write!(f, "no section is selected"),
            Self::SectionNotFound(id) => write!(f, "section not found: {id}"),
            Self::EmptyInstruction => write!(f, "refinement instruction must not be blank"),
            Self::EmptyComment => write!(f, "comment text must not be blank"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// In-memory editing state for one open project.
///
/// The store remains the source of truth; this is the cache the editor
/// mutates between flushes.
#[derive(Debug)]
pub struct EditorSession {
    project: Project,
    active_section: Option<SectionId>,
}

impl EditorSession {
    /// Wraps a loaded project; the first section starts selected.
    pub fn new(project: Project) -> Self {
        let active_section = project.sections.first().map(|section| section.id);
        Self {
            project,
            active_section,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn active_section_id(&self) -> Option<SectionId> {
        self.active_section
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.active_section.and_then(|id| self.project.section(id))
    }

    /// Selects a section of the open project.
    pub fn select_section(&mut self, id: SectionId) -> Result<(), EditorError> {
        if self.project.section(id).is_none() {
            return Err(EditorError::SectionNotFound(id));
        }
        self.active_section = Some(id);
        Ok(())
    }

    /// Replaces the active section's content locally, without flushing.
    ///
    /// Keystroke-level edits stay in memory; an explicit save (or the
    /// next committed mutation) persists them.
    pub fn edit_content(&mut self, content: impl Into<String>) -> Result<(), EditorError> {
        let id = self.active_section.ok_or(EditorError::NoActiveSection)?;
        let section = self
            .project
            .section_mut(id)
            .ok_or(EditorError::SectionNotFound(id))?;
        section.content = content.into();
        Ok(())
    }

    /// Builds the continuity context for drafting the active section:
    /// up to the two preceding sections as `title: excerpt...` lines.
    fn drafting_context(&self) -> Option<String> {
        let id = self.active_section?;
        let index = self.project.section_index(id)?;
        let start = index.saturating_sub(CONTEXT_SECTIONS);
        let lines: Vec<String> = self.project.sections[start..index]
            .iter()
            .map(|section| {
                let excerpt: String = section
                    .content
                    .chars()
                    .take(CONTEXT_EXCERPT_CHARS)
                    .collect();
                format!("{}: {excerpt}...", section.title)
            })
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

/// Editor service over a project store and a text generator.
pub struct EditorService<S: ProjectStore, G: TextGenerator> {
    store: S,
    generator: ContentGenerator<G>,
}

impl<S: ProjectStore, G: TextGenerator> EditorService<S, G> {
    pub fn new(store: S, generator: ContentGenerator<G>) -> Self {
        Self { store, generator }
    }

    pub fn generator(&self) -> &ContentGenerator<G> {
        &self.generator
    }

    /// Loads a project into an editing session.
    pub fn open(&self, id: ProjectId) -> Result<EditorSession, EditorError> {
        let project = self
            .store
            .get_project(id)?
            .ok_or(EditorError::ProjectNotFound(id))?;
        Ok(EditorSession::new(project))
    }

    /// Drafts content for the active section and flushes.
    ///
    /// The drafting contract never fails; generation problems surface as
    /// message text in the section body. The section ends `completed`.
    pub fn draft_active(&self, session: &mut EditorSession) -> Result<(), EditorError> {
        let id = session.active_section.ok_or(EditorError::NoActiveSection)?;
        let context = session.drafting_context();
        let topic = session.project.topic.clone();
        let doc_type = session.project.doc_type;

        {
            let section = session
                .project
                .section_mut(id)
                .ok_or(EditorError::SectionNotFound(id))?;
            section.status = SectionStatus::Generating;
        }

        let title = session
            .project
            .section(id)
            .map(|section| section.title.clone())
            .unwrap_or_default();
        let content = self
            .generator
            .draft_section(&topic, &title, doc_type, context.as_deref());

        let section = session
            .project
            .section_mut(id)
            .ok_or(EditorError::SectionNotFound(id))?;
        section.content = content;
        section.status = SectionStatus::Completed;
        self.flush(session);
        Ok(())
    }

    /// Refines the active section with a free-text instruction and
    /// flushes. Fails open: a generation failure leaves the content
    /// unchanged (the section still enters the `refining` state).
    pub fn refine_active(
        &self,
        session: &mut EditorSession,
        instruction: &str,
    ) -> Result<(), EditorError> {
        if instruction.trim().is_empty() {
            return Err(EditorError::EmptyInstruction);
        }
        let id = session.active_section.ok_or(EditorError::NoActiveSection)?;
        let doc_type = session.project.doc_type;
        let current = session
            .project
            .section(id)
            .ok_or(EditorError::SectionNotFound(id))?
            .content
            .clone();

        let refined = self.generator.refine(&current, instruction, doc_type);

        let section = session
            .project
            .section_mut(id)
            .ok_or(EditorError::SectionNotFound(id))?;
        section.content = refined;
        section.status = SectionStatus::Refining;
        self.flush(session);
        Ok(())
    }

    /// Toggles like/dislike feedback on the active section and flushes.
    pub fn toggle_feedback(
        &self,
        session: &mut EditorSession,
        feedback: Feedback,
    ) -> Result<(), EditorError> {
        let id = session.active_section.ok_or(EditorError::NoActiveSection)?;
        let section = session
            .project
            .section_mut(id)
            .ok_or(EditorError::SectionNotFound(id))?;
        section.toggle_feedback(feedback);
        self.flush(session);
        Ok(())
    }

    /// Appends a timestamped comment to the active section and flushes.
    pub fn add_comment(
        &self,
        session: &mut EditorSession,
        text: &str,
    ) -> Result<(), EditorError> {
        if text.trim().is_empty() {
            return Err(EditorError::EmptyComment);
        }
        let id = session.active_section.ok_or(EditorError::NoActiveSection)?;
        let section = session
            .project
            .section_mut(id)
            .ok_or(EditorError::SectionNotFound(id))?;
        section.comments.push(Comment::new(text));
        self.flush(session);
        Ok(())
    }

    /// Moves a section to a new position and flushes.
    pub fn move_section(&self, session: &mut EditorSession, from: usize, to: usize) {
        session.project.move_section(from, to);
        self.flush(session);
    }

    /// Persists the in-memory project explicitly (manual save).
    pub fn save(&self, session: &mut EditorSession) {
        self.flush(session);
    }

    /// Flushes the cached project to the store, fail-soft.
    ///
    /// The in-memory copy stays authoritative on failure; the next flush
    /// carries the same state again (last write wins).
    fn flush(&self, session: &mut EditorSession) {
        session.project.touch();
        if let Err(err) = self.store.update_project(&session.project) {
            warn!(
                "event=project_flush module=service status=error project_id={} error={err}",
                session.project.id
            );
        }
    }
}
