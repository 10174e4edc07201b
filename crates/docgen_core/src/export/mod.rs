//! Export planning layer.
//!
//! # Responsibility
//! - Flatten a project into the serializable plans consumed by the
//!   third-party document/slide file writers.
//! - Derive the export file name for either format.
//!
//! # Invariants
//! - Plans mirror the section order of the project exactly.
//! - No file bytes are produced here; writing is the downstream
//!   writer's job.

pub mod deck;
pub mod document;

use crate::model::project::{DocType, Project};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// File extension for a project's export format.
pub fn export_extension(doc_type: DocType) -> &'static str {
    match doc_type {
        DocType::Document => "docx",
        DocType::Deck => "pptx",
    }
}

/// Returns the download file name: project name with whitespace runs
/// collapsed to underscores, plus the format extension.
pub fn export_file_name(project: &Project) -> String {
    let stem = WHITESPACE_RE.replace_all(project.name.trim(), "_");
    format!("{stem}.{}", export_extension(project.doc_type))
}

#[cfg(test)]
mod tests {
    use super::export_file_name;
    use crate::model::project::{DocType, Project};
    use uuid::Uuid;

    #[test]
    fn file_name_collapses_whitespace_and_appends_extension() {
        let document = Project::from_outline(
            Uuid::new_v4(),
            " Q3  Financial Report ",
            "finances",
            DocType::Document,
            vec![],
        );
        assert_eq!(export_file_name(&document), "Q3_Financial_Report.docx");

        let deck = Project::from_outline(
            Uuid::new_v4(),
            "EV Update",
            "ev market",
            DocType::Deck,
            vec![],
        );
        assert_eq!(export_file_name(&deck), "EV_Update.pptx");
    }
}
