use serde::{Deserialize, Serialize};

/// Products carousel block on the home page: the slides, the section
/// titles above the carousel and the special-offer callout below it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsConfig {
    pub carousel_items: Vec<ProductSlide>,
    pub section: ProductsSection,
    pub special_offer: ProductsOffer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSlide {
    pub badge_title: String,
    pub main_title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsSection {
    pub small_title: String,
    pub black_title: String,
    pub orange_title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsOffer {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

impl Default for ProductsSection {
    fn default() -> Self {
        Self {
            small_title: "Our Menu".to_string(),
            black_title: "Fresh from the".to_string(),
            orange_title: "Oven".to_string(),
            description: "Discover our selection of handcrafted baked goods, each made with \
                          the finest ingredients and traditional baking methods."
                .to_string(),
        }
    }
}

impl Default for ProductsOffer {
    fn default() -> Self {
        Self {
            title: "Special Offer".to_string(),
            description: "Order 6 or more items and get 15% off!".to_string(),
            button_text: "View Full Menu".to_string(),
            button_link: "/menu".to_string(),
        }
    }
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            carousel_items: vec![
                ProductSlide {
                    badge_title: "Artisan Breads".to_string(),
                    main_title: "Artisan Breads".to_string(),
                    description: "Freshly baked daily with traditional techniques".to_string(),
                    image: "/images/artisan-breads.jpg".to_string(),
                },
                ProductSlide {
                    badge_title: "Pastries".to_string(),
                    main_title: "Pastries".to_string(),
                    description: "Delicate pastries made with premium butter".to_string(),
                    image: "/images/pastries.jpg".to_string(),
                },
                ProductSlide {
                    badge_title: "Custom Cakes".to_string(),
                    main_title: "Custom Cakes".to_string(),
                    description: "Personalized cakes for every celebration".to_string(),
                    image: "/images/custom-cakes.jpg".to_string(),
                },
            ],
            section: ProductsSection::default(),
            special_offer: ProductsOffer::default(),
        }
    }
}
