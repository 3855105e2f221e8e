//! Template Seeding
//!
//! Inserts a default template for a company in one transaction. Every group
//! is densely ordered from 1; checklists are laid out status first.

use rusqlite::{params, Transaction};

use reorder_core::ChecklistKind;

use crate::domain::{new_id, now_millis, DefaultTemplate, DomainError, DomainResult, SeedReport};

use super::db::{require_mut, SharedConnection};
use super::ordering::{self, SECTIONS};

pub struct TemplateRepository {
    conn: SharedConnection,
}

impl TemplateRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Seed `company_id` from `template`; refused when the company already
    /// has active sections
    pub async fn seed_company(&self, company_id: &str, template: &DefaultTemplate) -> DomainResult<SeedReport> {
        let mut guard = self.conn.lock().await;
        let conn = require_mut(&mut guard)?;
        let tx = conn.transaction()?;

        if !ordering::active_ids(&tx, SECTIONS, company_id)?.is_empty() {
            return Err(DomainError::Conflict(format!(
                "Company {} already has sections",
                company_id
            )));
        }

        let report = insert_template(&tx, company_id, template)?;
        tx.commit()?;

        log::info!(
            "seeded company {}: {} sections, {} subsections, {} checklists",
            company_id,
            report.sections,
            report.subsections,
            report.checklists
        );
        Ok(report)
    }
}

fn insert_template(tx: &Transaction, company_id: &str, template: &DefaultTemplate) -> DomainResult<SeedReport> {
    let now = now_millis();
    let mut report = SeedReport::default();

    for (s_pos, section) in template.sections.iter().enumerate() {
        let section_id = new_id();
        tx.execute(
            "INSERT INTO sections (id, company_id, name, order_index, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![section_id, company_id, section.name, s_pos as u32 + 1, now, now],
        )?;
        report.sections += 1;

        for (sub_pos, subsection) in section.subsections.iter().enumerate() {
            let subsection_id = new_id();
            tx.execute(
                "INSERT INTO subsections (id, section_id, name, order_index, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
                params![subsection_id, section_id, subsection.name, sub_pos as u32 + 1, now, now],
            )?;
            report.subsections += 1;

            let checklists = subsection
                .status
                .iter()
                .map(|name| (name, ChecklistKind::Status))
                .chain(subsection.information.iter().map(|name| (name, ChecklistKind::Information)));
            for (c_pos, (name, kind)) in checklists.enumerate() {
                tx.execute(
                    "INSERT INTO checklists (id, subsection_id, name, type, order_index, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
                    params![new_id(), subsection_id, name, kind.as_str(), c_pos as u32 + 1, now, now],
                )?;
                report.checklists += 1;
            }
        }
    }

    Ok(report)
}
