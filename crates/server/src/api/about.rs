//! # About API
//!
//! Static metadata for the about page.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use super::GITHUB_URL;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
    pub github_url: String,
    pub social_url: String,
    pub benefits: Vec<String>,
    pub how_to_use: Vec<String>,
    pub usage_notices: Vec<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Base Dapps Design Kit".to_string(),
            description:
                "Check and compare design kits across decentralized applications and protocols."
                    .to_string(),
            github_url: GITHUB_URL.to_string(),
            social_url: "https://x.com/W3ArtistNews".to_string(),
            benefits: [
                "Easy comparison of design across protocols",
                "Informed participation as an artist",
                "Inspiration for derivative works",
                "Quick verification of available design kits",
                "Enhanced understanding of dapp ecosystems",
            ]
            .map(String::from)
            .into(),
            how_to_use: [
                "Browse design kits by category",
                "Compare designs across different protocols",
                "Check availability of design kits for specific dapps",
                "Use as reference for your own designs or contributions",
                "Contact project teams for collaboration opportunities",
            ]
            .map(String::from)
            .into(),
            usage_notices: [
                "Always check the license of each design kit",
                "Contact the project team if rights are unclear",
                "Respect attribution requirements",
                "Seek permission for commercial use if required",
            ]
            .map(String::from)
            .into(),
        }
    }
}

/// Site metadata
#[utoipa::path(
    get,
    path = "/api/v1/about",
    tag = "about",
    responses(
        (status = 200, description = "About page content", body = SiteInfo)
    )
)]
pub async fn get_about() -> Json<SiteInfo> {
    Json(SiteInfo::default())
}
