use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of a catalog entry. `Title` is capitalized on the wire;
/// `rating` serializes as null when the row has none.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieEntry {
    #[serde(rename = "Title")]
    pub title: String,
    pub video_url: String,
    pub cover_img_url: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotFoundBody {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: "Test API".to_string(),
            description: "Test API Information".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}
