use serde::{Deserialize, Serialize};

/// Site-wide configuration: navigation labels, footer, social links,
/// the footer services list and browser metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteConfig {
    pub navigation: NavigationConfig,
    pub footer: FooterConfig,
    pub social_media: SocialMediaConfig,
    pub services: Vec<String>,
    pub metadata: SiteMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    pub logo_image: String,
    pub company_name: String,
    pub home: String,
    pub about: String,
    pub menu: String,
    pub contact: String,
    pub custom_order: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterConfig {
    pub company_name: String,
    pub company_description: String,
    pub copyright_text: String,
    pub home: String,
    pub about_us: String,
    pub our_menu: String,
    pub contact_us: String,
    pub custom_order: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMediaConfig {
    pub x: String,
    pub facebook: String,
    pub pinterest: String,
    pub instagram: String,
    pub youtube: String,
    pub linkedin: String,
    pub tiktok: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub favicon_image: String,
    pub browser_page_title: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            logo_image: String::new(),
            company_name: "Artisanal Baking".to_string(),
            home: "Home".to_string(),
            about: "About".to_string(),
            menu: "Menu".to_string(),
            contact: "Contact".to_string(),
            custom_order: "Custom Order".to_string(),
        }
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            company_name: "Artisanal Baking".to_string(),
            company_description: "Crafting delicious memories one bake at a time.".to_string(),
            copyright_text: "© 2024 Artisanal Baking. All rights reserved.".to_string(),
            home: "Home".to_string(),
            about_us: "About Us".to_string(),
            our_menu: "Our Menu".to_string(),
            contact_us: "Contact Us".to_string(),
            custom_order: "Custom Order".to_string(),
        }
    }
}

impl Default for SocialMediaConfig {
    fn default() -> Self {
        Self {
            x: String::new(),
            facebook: String::new(),
            pinterest: String::new(),
            instagram: String::new(),
            youtube: String::new(),
            linkedin: String::new(),
            tiktok: String::new(),
        }
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            favicon_image: String::new(),
            browser_page_title: "Artisanal Baking".to_string(),
        }
    }
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            footer: FooterConfig::default(),
            social_media: SocialMediaConfig::default(),
            services: vec![
                "Wedding Cakes".to_string(),
                "Birthday Cakes".to_string(),
                "Artisan Breads".to_string(),
                "Pastries".to_string(),
                "Bulk Orders".to_string(),
            ],
            metadata: SiteMetadata::default(),
        }
    }
}
