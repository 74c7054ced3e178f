//! Project showcase vocabulary shared by the search and creation views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a project title.
pub const TITLE_MAX_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Hackathon,
    #[serde(rename = "Class Project")]
    ClassProject,
    Research,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Hackathon,
        ProjectCategory::ClassProject,
        ProjectCategory::Research,
    ];

    /// Canonical value, as stored by the showcase backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Hackathon => "Hackathon",
            ProjectCategory::ClassProject => "Class Project",
            ProjectCategory::Research => "Research",
        }
    }

    /// Localized label.
    pub fn label(&self) -> String {
        match self {
            ProjectCategory::Hackathon => crate::t!("category-hackathon"),
            ProjectCategory::ClassProject => crate::t!("category-class-project"),
            ProjectCategory::Research => crate::t!("category-research"),
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for ProjectCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Client-side draft of a new project, validated before it leaves the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: Option<ProjectCategory>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftIssue {
    MissingTitle,
    TitleTooLong,
    MissingDescription,
    MissingCategory,
    InvalidVideoUrl,
}

impl DraftIssue {
    pub fn message(&self) -> String {
        match self {
            DraftIssue::MissingTitle => crate::t!("create-error-title"),
            DraftIssue::TitleTooLong => crate::t!("create-error-title-long"),
            DraftIssue::MissingDescription => crate::t!("create-error-description"),
            DraftIssue::MissingCategory => crate::t!("create-error-category"),
            DraftIssue::InvalidVideoUrl => crate::t!("create-error-video"),
        }
    }
}

impl ProjectDraft {
    /// All problems with the draft, in form order. Empty means submittable.
    pub fn validate(&self) -> Vec<DraftIssue> {
        let mut issues = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            issues.push(DraftIssue::MissingTitle);
        } else if title.chars().count() > TITLE_MAX_LEN {
            issues.push(DraftIssue::TitleTooLong);
        }
        if self.description.trim().is_empty() {
            issues.push(DraftIssue::MissingDescription);
        }
        if self.category.is_none() {
            issues.push(DraftIssue::MissingCategory);
        }
        if let Some(url) = self.video_url.as_deref().map(str::trim) {
            if !url.is_empty() && !is_http_url(url) {
                issues.push(DraftIssue::InvalidVideoUrl);
            }
        }

        issues
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            !host.is_empty() && !rest.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ProjectDraft {
        ProjectDraft {
            title: "Campus map".into(),
            description: "Indoor navigation for the library".into(),
            category: Some(ProjectCategory::ClassProject),
            video_url: None,
        }
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!(
            "class project".parse::<ProjectCategory>(),
            Ok(ProjectCategory::ClassProject)
        );
        assert_eq!(" Research ".parse(), Ok(ProjectCategory::Research));
        let err = "Workshop".parse::<ProjectCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown project category `Workshop`");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn category_serializes_with_backend_spelling() {
        let json = serde_json::to_string(&ProjectCategory::ClassProject).unwrap();
        assert_eq!(json, "\"Class Project\"");
    }

    #[test]
    fn complete_draft_has_no_issues() {
        assert!(complete().validate().is_empty());
    }

    #[test]
    fn empty_draft_reports_everything_in_order() {
        assert_eq!(
            ProjectDraft::default().validate(),
            vec![
                DraftIssue::MissingTitle,
                DraftIssue::MissingDescription,
                DraftIssue::MissingCategory,
            ]
        );
    }

    #[test]
    fn long_title_is_rejected() {
        let draft = ProjectDraft {
            title: "x".repeat(TITLE_MAX_LEN + 1),
            ..complete()
        };
        assert_eq!(draft.validate(), vec![DraftIssue::TitleTooLong]);
    }

    #[test]
    fn video_url_must_be_http() {
        let mut draft = complete();
        draft.video_url = Some("ftp://example.org/demo".into());
        assert_eq!(draft.validate(), vec![DraftIssue::InvalidVideoUrl]);

        draft.video_url = Some("https://".into());
        assert_eq!(draft.validate(), vec![DraftIssue::InvalidVideoUrl]);

        draft.video_url = Some("https://video.example.org/watch?v=1".into());
        assert!(draft.validate().is_empty());

        draft.video_url = Some("   ".into());
        assert!(draft.validate().is_empty());
    }
}
