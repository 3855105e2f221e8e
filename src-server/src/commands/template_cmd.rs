//! Template Commands

use crate::domain::{DefaultTemplate, DomainResult, SeedReport};
use crate::AppState;

/// Seed a company's template from the bundled default
pub async fn seed_default_template(state: &AppState, company_id: &str) -> DomainResult<SeedReport> {
    let template = DefaultTemplate::bundled()?;
    state.templates.seed_company(company_id, &template).await
}
