use serde::{Deserialize, Serialize};

/// Custom order page: hero copy plus the submission endpoint URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomOrderConfig {
    pub hero_image_desktop: String,
    pub hero_image_mobile: String,
    pub hero_title_black: String,
    pub hero_title_orange: String,
    pub hero_phrase: String,
    /// Endpoint the order form posts to. Empty means submissions are disabled.
    pub apps_script_url: String,
}

impl Default for CustomOrderConfig {
    fn default() -> Self {
        Self {
            hero_image_desktop: String::new(),
            hero_image_mobile: String::new(),
            hero_title_black: "Request a".to_string(),
            hero_title_orange: "Custom Order".to_string(),
            hero_phrase: "Let us know your vision".to_string(),
            apps_script_url: String::new(),
        }
    }
}

/// Fields collected by the custom order form, posted verbatim as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrderForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub order_type: String,
    pub delivery_date: String,
    pub delivery_time: String,
    pub address: String,
    pub message: String,
}
