//! Fixed mock result set for session-transfer integration testing.
//!
//! Requests whose filters resolve to the designated mock municipality get
//! this exact, constant response instead of real recommendations.

use crate::repository::{CatalogMetadata, ServiceChannel};

use super::RankedRecommendation;

/// Service id of the constant mock entry.
pub const MOCK_SERVICE_ID: &str = "6a2b1374-9a2d-47bc-8cd9-33b0db1566e1";

/// The deterministic mock result set: one service with three e-channels,
/// one per supported session-transfer variant.
pub fn mock_service_results() -> Vec<RankedRecommendation> {
    let channels = [
        (
            "f4eda39d-92ba-40cd-ae4a-a524e586969f",
            "Sessionsiirtolinkki, osa attribuuteista tuettu",
        ),
        (
            "0ba11195-de64-43b3-af64-41aba7285364",
            "Sessionsiirtolinkki, kaikki attribuutit tuettu",
        ),
        (
            "7a330e4e-f5e1-4884-81ea-34805fac20aa",
            "Ei session siirtoa",
        ),
    ];

    let service = CatalogMetadata {
        service_id: MOCK_SERVICE_ID.to_string(),
        service_name: "Testaa session siirtoa mock palvelussa".to_string(),
        service_description: "Mock palvelu".to_string(),
        description_summary: String::new(),
        user_instruction: String::new(),
        service_channels: channels
            .iter()
            .map(|&(id, name)| ServiceChannel {
                service_channel_id: id.to_string(),
                service_channel_name: name.to_string(),
                service_channel_type: "EChannel".to_string(),
                service_channel_description_summary: "Mock palvelun verkkosivu".to_string(),
                web_pages: vec!["/mock-service/service".to_string()],
            })
            .collect(),
    };

    vec![RankedRecommendation {
        rank: 1,
        similarity_score: 1.0,
        service,
    }]
}
