use serde::{Deserialize, Serialize};

/// Home page hero section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroConfig {
    pub hero_image_desktop: String,
    pub hero_image_mobile: String,
    pub title_black: String,
    pub title_orange: String,
    pub phrase: String,
    pub button_text: String,
    pub button_link: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            hero_image_desktop: String::new(),
            hero_image_mobile: String::new(),
            title_black: "Artisanal".to_string(),
            title_orange: "Baking".to_string(),
            phrase: "Made with Love".to_string(),
            button_text: "View Menu".to_string(),
            button_link: "/menu".to_string(),
        }
    }
}
