use serde::{Deserialize, Serialize};

/// Home page intro section: story titles, two paragraphs, three stat
/// blocks and a call-to-action button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeIntroConfig {
    pub small_title: String,
    pub black_title: String,
    pub orange_title: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub stats: Vec<IntroStat>,
    pub button_text: String,
    pub button_link: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntroStat {
    pub number: String,
    pub description: String,
}

impl IntroStat {
    pub fn new(number: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            description: description.into(),
        }
    }
}

impl Default for HomeIntroConfig {
    fn default() -> Self {
        Self {
            small_title: "Our Story".to_string(),
            black_title: "A Passion for".to_string(),
            orange_title: "Perfect Baking".to_string(),
            paragraph1: "For over a decade, we've been crafting artisanal baked goods that \
                         bring joy to every occasion. What started as a small home kitchen \
                         has grown into a beloved local bakery, but our commitment to \
                         quality and personal touch remains unchanged."
                .to_string(),
            paragraph2: "Every recipe is a family treasure, every ingredient carefully \
                         selected, and every creation made with the same love and attention \
                         to detail that we put into our very first batch."
                .to_string(),
            stats: vec![
                IntroStat::new("10+", "Years Experience"),
                IntroStat::new("500+", "Happy Customers"),
                IntroStat::new("50+", "Unique Recipes"),
            ],
            button_text: "Learn More About Us".to_string(),
            button_link: "/about".to_string(),
            image: String::new(),
        }
    }
}
