use serde::{Deserialize, Serialize};

/// Contact page: hero, contact info box, map embed and the FAQ list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub hero_image_desktop: String,
    pub hero_image_mobile: String,
    pub hero_title_black: String,
    pub hero_title_orange: String,
    pub hero_phrase: String,

    pub contact_box_title: String,
    pub address_title: String,
    pub address_info: String,
    pub phone_title: String,
    pub phone_info: String,
    pub email_title: String,
    pub email_info: String,
    pub hours_title: String,
    pub hours_info: String,

    pub map_title: String,
    pub map_description: String,
    /// A bare Google Maps embed URL. Pasted iframe markup is reduced to its
    /// `src` URL during transformation; anything else becomes empty.
    pub map_embed_url: String,

    pub faq_title: String,
    pub faqs: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            hero_image_desktop: String::new(),
            hero_image_mobile: String::new(),
            hero_title_black: "Ready to".to_string(),
            hero_title_orange: "Order?".to_string(),
            hero_phrase: "We'd love to hear from you".to_string(),

            contact_box_title: "Contact Information".to_string(),
            address_title: "Address".to_string(),
            address_info: "123 Baker Street, Sweetville, CA 90210".to_string(),
            phone_title: "Phone".to_string(),
            phone_info: "(555) 123-4567".to_string(),
            email_title: "Email".to_string(),
            email_info: "hello@artisanbaking.com".to_string(),
            hours_title: "Hours".to_string(),
            hours_info: "Mon-Fri: 7AM-6PM\nSat: 8AM-4PM\nSun: 9AM-2PM".to_string(),

            map_title: "Our Location".to_string(),
            map_description: "Serving Sweetville and the surrounding area. Find us in the \
                              heart of downtown at 123 Baker Street, Sweetville, CA."
                .to_string(),
            map_embed_url: String::new(),

            faq_title: "Frequently Asked Questions".to_string(),
            faqs: vec![FaqItem {
                id: "faq-1".to_string(),
                question: "How far in advance should I order a custom cake?".to_string(),
                answer: "We recommend ordering custom cakes at least 1-2 weeks in advance to \
                         ensure we have enough time to create your perfect design. For \
                         wedding cakes or large orders, we suggest 3-4 weeks notice."
                    .to_string(),
            }],
        }
    }
}
