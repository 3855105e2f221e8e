//! Commands Layer
//!
//! Operations the HTTP surface exposes, one function per contract. Item
//! commands are generic over the item kind so sections, subsections and
//! checklists share one implementation.

mod item_cmd;
mod schedule_cmd;
mod template_cmd;

use serde::Serialize;

use reorder_core::Orderable;

use crate::domain::{Checklist, Entity, Section, Subsection};
use crate::repository::{ChecklistRepository, OrderedRepository, SectionRepository, SubsectionRepository};
use crate::AppState;

pub use item_cmd::*;
pub use schedule_cmd::*;
pub use template_cmd::*;

/// One orderable item kind and the repository holding it
pub trait ItemKind: Send + Sync + 'static {
    type Item: Entity + Orderable + Serialize + 'static;
    type Repo: OrderedRepository<Self::Item> + 'static;

    /// Plural name used in operation labels ("sections.reorder")
    const NAME: &'static str;

    fn repo(state: &AppState) -> &Self::Repo;
}

pub struct Sections;
pub struct Subsections;
pub struct Checklists;

impl ItemKind for Sections {
    type Item = Section;
    type Repo = SectionRepository;
    const NAME: &'static str = "sections";

    fn repo(state: &AppState) -> &SectionRepository {
        &state.sections
    }
}

impl ItemKind for Subsections {
    type Item = Subsection;
    type Repo = SubsectionRepository;
    const NAME: &'static str = "subsections";

    fn repo(state: &AppState) -> &SubsectionRepository {
        &state.subsections
    }
}

impl ItemKind for Checklists {
    type Item = Checklist;
    type Repo = ChecklistRepository;
    const NAME: &'static str = "checklists";

    fn repo(state: &AppState) -> &ChecklistRepository {
        &state.checklists
    }
}
