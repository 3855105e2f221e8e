use serde::{Deserialize, Serialize};

use reorder_core::OrderEntry;

use crate::domain::SeedReport;

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub entries: Vec<OrderEntry>,
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub company_id: String,
    pub seeded: SeedReport,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub slots: Vec<u32>,
}
