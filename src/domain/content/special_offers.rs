use serde::{Deserialize, Serialize};

/// Menu page hero plus the bottom special-offers banner (up to three offers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialOffersConfig {
    pub hero_image_desktop: String,
    pub hero_image_mobile: String,
    pub hero_title_black: String,
    pub hero_title_orange: String,
    pub hero_phrase: String,
    pub banner_title: String,
    pub special_offers: Vec<SpecialOffer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

impl Default for SpecialOffersConfig {
    fn default() -> Self {
        Self {
            hero_image_desktop: String::new(),
            hero_image_mobile: String::new(),
            hero_title_black: "Fresh from the".to_string(),
            hero_title_orange: "Oven".to_string(),
            hero_phrase: "Discover our complete selection".to_string(),
            banner_title: "Special Offers".to_string(),
            special_offers: vec![
                SpecialOffer {
                    title: "Bulk Discount".to_string(),
                    description: "Order 6 or more items and get 15% off!".to_string(),
                    button_text: "Learn More".to_string(),
                    button_link: "#".to_string(),
                },
                SpecialOffer {
                    title: "Wedding Package".to_string(),
                    description: "Complete wedding cake package with consultation".to_string(),
                    button_text: "Get Quote".to_string(),
                    button_link: "#".to_string(),
                },
                SpecialOffer {
                    title: "Daily Special".to_string(),
                    description: "Fresh bread and pastries at 20% off after 4PM".to_string(),
                    button_text: "View Today's".to_string(),
                    button_link: "#".to_string(),
                },
            ],
        }
    }
}
