use crate::application::extract::text;
use crate::domain::content::{SpecialOffer, SpecialOffersConfig};
use crate::infrastructure::sheets::parse_key_values;

pub(crate) fn transform(csv: &str) -> Option<SpecialOffersConfig> {
    let map = parse_key_values(csv);
    if map.is_empty() {
        return None;
    }

    // An offer without a title is treated as unused.
    let special_offers = (1..=3)
        .filter_map(|i| {
            let title = map
                .get(&format!("Menu Offer{} Title", i))
                .filter(|s| !s.is_empty())?;
            Some(SpecialOffer {
                title: title.clone(),
                description: text(&map, &format!("Menu Offer{} Description", i), ""),
                button_text: text(&map, &format!("Menu Offer{} Button Text", i), "Learn More"),
                button_link: text(&map, &format!("Menu Offer{} Button Link", i), "#"),
            })
        })
        .collect();

    Some(SpecialOffersConfig {
        hero_image_desktop: text(&map, "Menu Hero Desktop Image", ""),
        hero_image_mobile: text(&map, "Menu Hero Mobile Image", ""),
        hero_title_black: text(&map, "Menu Hero Title Black", "Fresh from the"),
        hero_title_orange: text(&map, "Menu Hero Title Orange", "Oven"),
        hero_phrase: text(&map, "Menu Hero Phrase", "Discover our complete selection"),
        banner_title: text(&map, "Menu Bottom Banner Title", "Special Offers"),
        special_offers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers_without_title_are_dropped() {
        let csv = "Menu Offer1 Title,Weekend Deal\n\
                   Menu Offer1 Description,Two for one\n\
                   Menu Offer2 Description,No title here\n\
                   Menu Offer3 Title,Holiday Box";
        let config = transform(csv).unwrap();
        assert_eq!(config.special_offers.len(), 2);
        assert_eq!(config.special_offers[0].title, "Weekend Deal");
        assert_eq!(config.special_offers[1].title, "Holiday Box");
        assert_eq!(config.special_offers[1].button_text, "Learn More");
        assert_eq!(config.special_offers[1].button_link, "#");
    }

    #[test]
    fn test_hero_falls_back() {
        let config = transform("Menu Hero Phrase,Baked today").unwrap();
        assert_eq!(config.hero_phrase, "Baked today");
        assert_eq!(config.hero_title_black, "Fresh from the");
        assert!(config.special_offers.is_empty());
    }

    #[test]
    fn test_empty_sheet_yields_none() {
        assert!(transform("").is_none());
    }
}
