//! Project, section and comment domain model.
//!
//! # Responsibility
//! - Define the project aggregate edited by the section editor and
//!   flattened by the export layer.
//! - Provide lifecycle helpers for section status, feedback and ordering.
//!
//! # Invariants
//! - Section identifiers are stable across edits.
//! - `sections` keeps user-assigned order; reordering is explicit.
//! - Deleting a project is a hard delete; there is no tombstone state.

use crate::model::now_epoch_ms;
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;
/// Stable identifier for a section within a project.
pub type SectionId = Uuid;
/// Stable identifier for a comment on a section.
pub type CommentId = Uuid;

/// Output format family of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    /// Word-processor document: prose sections under headings.
    Document,
    /// Slide deck: one content slide per section.
    Deck,
}

/// Generation lifecycle state of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    /// Created from the outline, no content yet.
    Pending,
    /// A draft request is in flight.
    Generating,
    /// Drafting finished.
    Completed,
    /// Content was rewritten by a refinement instruction.
    Refining,
}

/// Reader feedback on generated section content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Like,
    Dislike,
}

/// Free-text note attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub created_at_ms: i64,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_at_ms: now_epoch_ms(),
        }
    }
}

/// One unit of document/slide content with its own generation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub content: String,
    pub status: SectionStatus,
    pub feedback: Option<Feedback>,
    pub comments: Vec<Comment>,
}

impl Section {
    /// Creates an empty pending section from an outline title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: String::new(),
            status: SectionStatus::Pending,
            feedback: None,
            comments: Vec::new(),
        }
    }

    /// Flips feedback on or off: selecting the current value clears it.
    pub fn toggle_feedback(&mut self, feedback: Feedback) {
        if self.feedback == Some(feedback) {
            self.feedback = None;
        } else {
            self.feedback = Some(feedback);
        }
    }
}

/// Project aggregate: one document or deck with its ordered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub owner_id: UserId,
    pub name: String,
    pub topic: String,
    pub doc_type: DocType,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
    pub sections: Vec<Section>,
}

impl Project {
    /// Creates a project from an accepted outline.
    ///
    /// Every outline title becomes one empty pending section, in the given
    /// order. An empty project name falls back to the topic.
    pub fn from_outline(
        owner_id: UserId,
        name: impl Into<String>,
        topic: impl Into<String>,
        doc_type: DocType,
        outline: Vec<String>,
    ) -> Self {
        let topic = topic.into();
        let name = name.into();
        let name = if name.trim().is_empty() {
            topic.clone()
        } else {
            name
        };
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            topic,
            doc_type,
            created_at_ms: now,
            updated_at_ms: now,
            sections: outline.into_iter().map(Section::new).collect(),
        }
    }

    /// Returns the position of a section, if present.
    pub fn section_index(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.id == id)
    }

    /// Moves the section at `from` so it ends up at position `to`,
    /// shifting the sections in between. Out-of-range positions are
    /// ignored.
    pub fn move_section(&mut self, from: usize, to: usize) {
        if from == to || from >= self.sections.len() || to >= self.sections.len() {
            return;
        }
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
    }

    /// Stamps the aggregate as modified now.
    pub fn touch(&mut self) {
        self.updated_at_ms = now_epoch_ms();
    }
}
