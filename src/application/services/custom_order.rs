use crate::application::extract::text;
use crate::domain::content::CustomOrderConfig;
use crate::infrastructure::sheets::parse_key_values;

pub(crate) fn transform(csv: &str) -> Option<CustomOrderConfig> {
    let map = parse_key_values(csv);
    if map.is_empty() {
        return None;
    }

    Some(CustomOrderConfig {
        hero_image_desktop: text(&map, "Form Page Hero Desktop Image", ""),
        hero_image_mobile: text(&map, "Form Page Hero Mobile Image", ""),
        hero_title_black: text(&map, "Form Page Hero Title Black", "Request a"),
        hero_title_orange: text(&map, "Form Page Hero Title Orange", "Custom Order"),
        hero_phrase: text(&map, "Form Page Hero Phrase", "Let us know your vision"),
        apps_script_url: text(&map, "Google Apps Script url", ""),
    })
}
