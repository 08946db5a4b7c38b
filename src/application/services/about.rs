use crate::application::extract::text;
use crate::domain::content::AboutConfig;
use crate::infrastructure::sheets::parse_key_values;

pub(crate) fn transform(csv: &str) -> Option<AboutConfig> {
    let map = parse_key_values(csv);
    if map.is_empty() {
        return None;
    }

    let d = AboutConfig::default();
    Some(AboutConfig {
        hero_image_desktop: text(&map, "About Hero Desktop Image", ""),
        hero_image_mobile: text(&map, "About Hero Mobile Image", ""),
        hero_title_black: text(&map, "About Hero Black Title", &d.hero_title_black),
        hero_title_orange: text(&map, "About Hero Orange Title", &d.hero_title_orange),
        hero_phrase: text(&map, "About Hero Phrase", &d.hero_phrase),

        intro_title: text(&map, "About Intro Title", &d.intro_title),
        intro_description: text(&map, "About Intro Description", &d.intro_description),
        intro_description2: text(&map, "About Intro Description2", &d.intro_description2),
        intro_image: text(&map, "About Intro Image", ""),

        values_title: text(&map, "About Values Title", &d.values_title),
        value1_title: text(&map, "About Value1 Title", &d.value1_title),
        value1_description: text(&map, "About Value1 Description", &d.value1_description),
        value2_title: text(&map, "About Value2 Title", &d.value2_title),
        value2_description: text(&map, "About Value2 Description", &d.value2_description),
        value3_title: text(&map, "About Value3 Title", &d.value3_title),
        value3_description: text(&map, "About Value3 Description", &d.value3_description),

        banner_title: text(&map, "About Banner Title", &d.banner_title),
        banner_stat1_title: text(&map, "About Banner Stat1 Title", &d.banner_stat1_title),
        banner_stat1_description: text(
            &map,
            "About Banner Stat1 Description",
            &d.banner_stat1_description,
        ),
        banner_stat2_title: text(&map, "About Banner Stat2 Title", &d.banner_stat2_title),
        banner_stat2_description: text(
            &map,
            "About Banner Stat2 Description",
            &d.banner_stat2_description,
        ),
        banner_stat3_title: text(&map, "About Banner Stat3 Title", &d.banner_stat3_title),
        banner_stat3_description: text(
            &map,
            "About Banner Stat3 Description",
            &d.banner_stat3_description,
        ),
        banner_stat4_title: text(&map, "About Banner Stat4 Title", &d.banner_stat4_title),
        banner_stat4_description: text(
            &map,
            "About Banner Stat4 Description",
            &d.banner_stat4_description,
        ),
    })
}
