use crate::application::extract::text;
use crate::domain::content::{
    FooterConfig, NavigationConfig, SiteMetadata, SocialMediaConfig, WebsiteConfig,
};
use crate::infrastructure::sheets::parse_key_values;

pub(crate) fn transform(csv: &str) -> Option<WebsiteConfig> {
    let map = parse_key_values(csv);
    if map.is_empty() {
        return None;
    }

    let services: Vec<String> = (1..=5)
        .filter_map(|i| map.get(&format!("Services Line{}", i)))
        .filter(|line| !line.is_empty())
        .cloned()
        .collect();

    Some(WebsiteConfig {
        navigation: NavigationConfig {
            logo_image: text(&map, "Nav Logo Image", ""),
            company_name: text(&map, "Nav Company Name", "Artisanal Baking"),
            home: text(&map, "Nav Home", "Home"),
            about: text(&map, "Nav About", "About"),
            menu: text(&map, "Nav Menu", "Menu"),
            contact: text(&map, "Nav Contact", "Contact"),
            custom_order: text(&map, "Nav Custom Order", "Custom Order"),
        },
        footer: FooterConfig {
            company_name: text(&map, "Footer Company Name", "Artisanal Baking"),
            company_description: text(
                &map,
                "Footer Company Description",
                "Crafting delicious memories one bake at a time.",
            ),
            copyright_text: text(&map, "Footer Copyright Text", ""),
            home: text(&map, "Footer Home", "Home"),
            about_us: text(&map, "Footer About Us", "About Us"),
            our_menu: text(&map, "Footer Our Menu", "Our Menu"),
            contact_us: text(&map, "Footer Contact Us", "Contact Us"),
            custom_order: text(&map, "Footer Custom Order", "Custom Order"),
        },
        social_media: SocialMediaConfig {
            x: text(&map, "X url", ""),
            facebook: text(&map, "Facebook url", ""),
            pinterest: text(&map, "Pinterest url", ""),
            instagram: text(&map, "Instagram url", ""),
            youtube: text(&map, "Youtube url", ""),
            linkedin: text(&map, "Linkedin url", ""),
            tiktok: text(&map, "Tiktok url", ""),
        },
        services,
        metadata: SiteMetadata {
            favicon_image: text(&map, "Favicon Image", ""),
            browser_page_title: text(&map, "Browser Page Title", ""),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_reads_sheet_values() {
        let csv = "Nav Company Name,Sweet Crumb\nFooter Copyright Text,© Sweet Crumb\nServices Line1,Cakes\nServices Line3,Breads";
        let config = transform(csv).unwrap();
        assert_eq!(config.navigation.company_name, "Sweet Crumb");
        assert_eq!(config.footer.copyright_text, "© Sweet Crumb");
        assert_eq!(config.services, vec!["Cakes", "Breads"]);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let config = transform("Nav Home,Start").unwrap();
        assert_eq!(config.navigation.home, "Start");
        assert_eq!(config.navigation.company_name, "Artisanal Baking");
        assert_eq!(config.footer.contact_us, "Contact Us");
        assert!(config.services.is_empty());
    }

    #[test]
    fn test_empty_sheet_yields_none() {
        assert!(transform("").is_none());
    }
}
