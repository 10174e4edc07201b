//! Slide-deck export plan.
//!
//! # Responsibility
//! - Flatten a project into a title slide plus one content slide per
//!   section for the deck writer.

use crate::model::project::Project;
use serde::Serialize;

/// Opening slide carrying the project name and topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSlide {
    pub heading: String,
    pub subheading: String,
}

/// One content slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSlide {
    pub title: String,
    pub body: String,
}

/// Serializable plan handed to the deck writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckPlan {
    pub title_slide: TitleSlide,
    pub slides: Vec<ContentSlide>,
}

/// Builds the deck plan for a project.
pub fn deck_plan(project: &Project) -> DeckPlan {
    DeckPlan {
        title_slide: TitleSlide {
            heading: project.name.clone(),
            subheading: project.topic.clone(),
        },
        slides: project
            .sections
            .iter()
            .map(|section| ContentSlide {
                title: section.title.clone(),
                body: section.content.clone(),
            })
            .collect(),
    }
}
