use crate::application::extract::text;
use crate::domain::content::{HomeIntroConfig, IntroStat};
use crate::infrastructure::sheets::parse_key_values;

pub(crate) fn transform(csv: &str) -> Option<HomeIntroConfig> {
    let map = parse_key_values(csv);
    if map.is_empty() {
        return None;
    }

    let stats = (1..=3)
        .map(|i| {
            IntroStat::new(
                text(&map, &format!("Home Intro Stat{}", i), ""),
                text(&map, &format!("Home Stat{} Description", i), ""),
            )
        })
        .collect();

    Some(HomeIntroConfig {
        small_title: text(&map, "Home Intro Small Title", "Our Story"),
        black_title: text(&map, "Home Intro Black Title", "A Passion for"),
        orange_title: text(&map, "Home Intro Orange Title", "Perfect Baking"),
        paragraph1: text(
            &map,
            "Home Intro Paragraph1",
            "For over a decade, we've been crafting artisanal baked goods that bring joy to \
             every occasion. What started as a small home kitchen has grown into a beloved \
             local bakery, but our commitment to quality and personal touch remains unchanged.",
        ),
        paragraph2: text(&map, "Home Intro Paragraph2", ""),
        stats,
        button_text: text(&map, "Home Intro Button Text", "Learn More About Us"),
        button_link: text(&map, "Home Intro Button Link", "/about"),
        image: text(&map, "Home Intro Image", ""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_reads_stats_in_order() {
        let csv = "Home Intro Stat1,12+\nHome Stat1 Description,Years\nHome Intro Stat3,99+\nHome Stat3 Description,Recipes";
        let config = transform(csv).unwrap();
        assert_eq!(config.stats.len(), 3);
        assert_eq!(config.stats[0].number, "12+");
        assert_eq!(config.stats[1].number, "");
        assert_eq!(config.stats[2].description, "Recipes");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let config = transform("Home Intro Small Title,Heritage").unwrap();
        assert_eq!(config.small_title, "Heritage");
        assert_eq!(config.button_link, "/about");
        assert_eq!(config.paragraph2, "");
    }

    #[test]
    fn test_empty_sheet_yields_none() {
        assert!(transform("").is_none());
    }
}
