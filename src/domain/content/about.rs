use serde::{Deserialize, Serialize};

/// About page: hero, intro, the three value cards and the stats banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutConfig {
    pub hero_image_desktop: String,
    pub hero_image_mobile: String,
    pub hero_title_black: String,
    pub hero_title_orange: String,
    pub hero_phrase: String,

    pub intro_title: String,
    pub intro_description: String,
    pub intro_description2: String,
    pub intro_image: String,

    pub values_title: String,
    pub value1_title: String,
    pub value1_description: String,
    pub value2_title: String,
    pub value2_description: String,
    pub value3_title: String,
    pub value3_description: String,

    pub banner_title: String,
    pub banner_stat1_title: String,
    pub banner_stat1_description: String,
    pub banner_stat2_title: String,
    pub banner_stat2_description: String,
    pub banner_stat3_title: String,
    pub banner_stat3_description: String,
    pub banner_stat4_title: String,
    pub banner_stat4_description: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            hero_image_desktop: String::new(),
            hero_image_mobile: String::new(),
            hero_title_black: "Our Baking".to_string(),
            hero_title_orange: "Story".to_string(),
            hero_phrase: "Discover the passion".to_string(),

            intro_title: "A Family Tradition".to_string(),
            intro_description: "Our journey began in a small kitchen with a big dream. What \
                                started as a grandmother's secret recipes has grown into a \
                                beloved local bakery, but our commitment to quality and \
                                personal touch remains unchanged."
                .to_string(),
            intro_description2: "Every recipe is a family treasure, every ingredient carefully \
                                 selected, and every creation made with the same love and \
                                 attention to detail that we put into our very first batch."
                .to_string(),
            intro_image: String::new(),

            values_title: "Our Values".to_string(),
            value1_title: "Quality First".to_string(),
            value1_description: "We use only the finest ingredients and traditional baking \
                                 methods to ensure every product meets our high standards."
                .to_string(),
            value2_title: "Made with Love".to_string(),
            value2_description: "Every creation is crafted with passion, care, and the same \
                                 love that goes into baking for our own family."
                .to_string(),
            value3_title: "Community Focused".to_string(),
            value3_description: "We're proud to be part of our local community and love \
                                 creating special moments for our neighbors and friends."
                .to_string(),

            banner_title: "Our Journey in Numbers".to_string(),
            banner_stat1_title: "10+".to_string(),
            banner_stat1_description: "Years Experience".to_string(),
            banner_stat2_title: "500+".to_string(),
            banner_stat2_description: "Happy Customers".to_string(),
            banner_stat3_title: "50+".to_string(),
            banner_stat3_description: "Unique Recipes".to_string(),
            banner_stat4_title: "1000+".to_string(),
            banner_stat4_description: "Cakes Baked".to_string(),
        }
    }
}
