//! Domain Layer
//!
//! Entities of an inspection template and the rules that need no storage.

mod availability;
mod checklist;
mod entity;
mod section;
mod subsection;
mod template;

pub use availability::{available_slots, AvailabilityRequest, TimeWindow};
pub use checklist::Checklist;
pub use entity::{new_id, now_millis, validate_name, DomainError, DomainResult, Entity};
pub use section::Section;
pub use subsection::Subsection;
pub use template::{DefaultTemplate, SeedReport, TemplateSection, TemplateSubsection};
