//! Word-processor export plan.
//!
//! # Responsibility
//! - Flatten a project into title/subtitle/blocks for the document
//!   writer: one heading per section, one paragraph per content line.
//!
//! # Invariants
//! - Blank content lines survive as empty paragraphs (spacing is the
//!   writer's decision, not dropped data).

use crate::model::project::Project;
use serde::Serialize;

/// One body element of the planned document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum DocBlock {
    /// Section heading.
    Heading(String),
    /// One line of section content; may be empty.
    Paragraph(String),
}

/// Serializable plan handed to the document writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentPlan {
    /// Document title (the project name).
    pub title: String,
    /// Topic subtitle rendered under the title.
    pub subtitle: String,
    pub blocks: Vec<DocBlock>,
}

/// Builds the document plan for a project.
pub fn document_plan(project: &Project) -> DocumentPlan {
    let mut blocks = Vec::new();
    for section in &project.sections {
        blocks.push(DocBlock::Heading(section.title.clone()));
        for line in section.content.lines() {
            blocks.push(DocBlock::Paragraph(line.trim().to_string()));
        }
    }

    DocumentPlan {
        title: project.name.clone(),
        subtitle: format!("Topic: {}", project.topic),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::{document_plan, DocBlock};
    use crate::model::project::{DocType, Project};
    use uuid::Uuid;

    #[test]
    fn plan_emits_heading_then_one_paragraph_per_line() {
        let mut project = Project::from_outline(
            Uuid::new_v4(),
            "Report",
            "plants",
            DocType::Document,
            vec!["Intro".to_string(), "Care".to_string()],
        );
        project.sections[0].content = "first line\n\nsecond line".to_string();

        let plan = document_plan(&project);
        assert_eq!(plan.title, "Report");
        assert_eq!(plan.subtitle, "Topic: plants");
        assert_eq!(
            plan.blocks,
            vec![
                DocBlock::Heading("Intro".to_string()),
                DocBlock::Paragraph("first line".to_string()),
                DocBlock::Paragraph(String::new()),
                DocBlock::Paragraph("second line".to_string()),
                DocBlock::Heading("Care".to_string()),
            ]
        );
    }
}
