//! Template Commands

use super::{api_base, segment, send};
use crate::models::SeedResponse;

/// Insert the bundled default template for a company without sections
pub async fn seed_default_template(company_id: &str) -> Result<SeedResponse, String> {
    let url = format!("{}/companies/{}/seed", api_base(), segment(company_id));
    send(reqwest::Client::new().post(url)).await.map_err(|e| e.to_string())
}
