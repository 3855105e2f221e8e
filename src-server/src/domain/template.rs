//! Default Inspection Template
//!
//! Bundled starter sections, subsections and checklist items a company can
//! seed its template from.

use serde::Deserialize;

use super::entity::{DomainError, DomainResult};

const DEFAULT_TEMPLATE_JSON: &str = include_str!("../../assets/default_template.json");

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultTemplate {
    pub sections: Vec<TemplateSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSection {
    pub name: String,
    #[serde(default)]
    pub subsections: Vec<TemplateSubsection>,
}

/// Checklist names per kind, in display order
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSubsection {
    pub name: String,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub information: Vec<String>,
}

impl DefaultTemplate {
    pub fn bundled() -> DomainResult<Self> {
        Self::parse(DEFAULT_TEMPLATE_JSON)
    }

    pub fn parse(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::Internal(format!("Invalid template fixture: {}", e)))
    }
}

/// What a seed run inserted
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub sections: u32,
    pub subsections: u32,
    pub checklists: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_template_parses() {
        let template = DefaultTemplate::bundled().unwrap();
        assert!(!template.sections.is_empty());
        assert!(template
            .sections
            .iter()
            .flat_map(|s| &s.subsections)
            .any(|sub| !sub.status.is_empty() && !sub.information.is_empty()));
    }

    #[test]
    fn test_missing_groups_default_empty() {
        let template = DefaultTemplate::parse(r#"{"sections":[{"name":"Attic","subsections":[{"name":"Insulation"}]}]}"#).unwrap();
        let sub = &template.sections[0].subsections[0];
        assert!(sub.status.is_empty());
        assert!(sub.information.is_empty());
    }
}
