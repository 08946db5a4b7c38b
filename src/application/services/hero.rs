use crate::application::extract::text;
use crate::domain::content::HeroConfig;
use crate::infrastructure::sheets::parse_key_values;

pub(crate) fn transform(csv: &str) -> Option<HeroConfig> {
    let map = parse_key_values(csv);
    if map.is_empty() {
        return None;
    }

    Some(HeroConfig {
        hero_image_desktop: text(&map, "Home Hero Desktop Image", ""),
        hero_image_mobile: text(&map, "Home Hero Mobile Image", ""),
        title_black: text(&map, "Home Hero Title Black", "Artisanal"),
        title_orange: text(&map, "Home Hero Title Orange", "Baking"),
        phrase: text(&map, "Home Hero Phrase", "Made with Love"),
        button_text: text(&map, "Home Hero Button Text", "View Menu"),
        button_link: text(&map, "Home Hero Button Link", "/menu"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_reads_sheet_values() {
        let csv = "Home Hero Title Black,Fresh\nHome Hero Title Orange,Daily\nHome Hero Button Link,/order";
        let config = transform(csv).unwrap();
        assert_eq!(config.title_black, "Fresh");
        assert_eq!(config.title_orange, "Daily");
        assert_eq!(config.button_link, "/order");
        assert_eq!(config.button_text, "View Menu");
    }

    #[test]
    fn test_empty_sheet_yields_none() {
        assert!(transform("\n  \n").is_none());
    }
}
