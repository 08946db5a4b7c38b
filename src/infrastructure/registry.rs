use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

const BASE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRUSiE3ZGt0ccb5uNC6HSuNK-KVjEgCD04YxDGclPhstHLZgWBe6z8Rep_W9ojiRDaU3BqqnRi2KL_Z/pub";

fn sheet_url(gid: &str) -> String {
    format!("{}?gid={}&single=true&output=csv", BASE, gid)
}

/// Every content area served from a published sheet tab.
///
/// `Hero`, `HomeIntro`, `Testimonials` and `Products` all read the same
/// tab; they stay separate domains because each caches and falls back
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetDomain {
    Website,
    Hero,
    HomeIntro,
    Testimonials,
    Products,
    About,
    SpecialOffers,
    Menu,
    Contact,
    CustomOrder,
    Legal,
}

impl SheetDomain {
    pub const ALL: [SheetDomain; 11] = [
        SheetDomain::Website,
        SheetDomain::Hero,
        SheetDomain::HomeIntro,
        SheetDomain::Testimonials,
        SheetDomain::Products,
        SheetDomain::About,
        SheetDomain::SpecialOffers,
        SheetDomain::Menu,
        SheetDomain::Contact,
        SheetDomain::CustomOrder,
        SheetDomain::Legal,
    ];

    /// Cache slot for this domain's parsed configuration.
    pub fn cache_key(&self) -> &'static str {
        match self {
            SheetDomain::Website => "website_config",
            SheetDomain::Hero => "hero_config",
            SheetDomain::HomeIntro => "home_intro_config",
            SheetDomain::Testimonials => "testimonials_config",
            SheetDomain::Products => "products_config",
            SheetDomain::About => "about_config",
            SheetDomain::SpecialOffers => "special_offers_config",
            SheetDomain::Menu => "menu_config",
            SheetDomain::Contact => "contact_config",
            SheetDomain::CustomOrder => "custom_order_config",
            SheetDomain::Legal => "legal_config",
        }
    }

    /// Human-readable name used in logs and aggregate error reports.
    pub fn name(&self) -> &'static str {
        match self {
            SheetDomain::Website => "website",
            SheetDomain::Hero => "hero",
            SheetDomain::HomeIntro => "home intro",
            SheetDomain::Testimonials => "testimonials",
            SheetDomain::Products => "products",
            SheetDomain::About => "about",
            SheetDomain::SpecialOffers => "special offers",
            SheetDomain::Menu => "menu",
            SheetDomain::Contact => "contact",
            SheetDomain::CustomOrder => "custom order",
            SheetDomain::Legal => "legal",
        }
    }
}

impl std::fmt::Display for SheetDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// CSV export URL for every sheet domain.
///
/// Defaults point at the demo spreadsheet; deployments override them
/// through `Sheetfed.toml` or `SHEETFED_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRegistry {
    pub website_url: String,
    pub hero_url: String,
    pub home_intro_url: String,
    pub testimonials_url: String,
    pub products_url: String,
    pub about_url: String,
    pub special_offers_url: String,
    pub menu_url: String,
    pub contact_url: String,
    pub custom_order_url: String,
    pub legal_url: String,
}

impl Default for SheetRegistry {
    fn default() -> Self {
        let home_tab = sheet_url("417426300");
        Self {
            website_url: sheet_url("135580160"),
            hero_url: home_tab.clone(),
            home_intro_url: home_tab.clone(),
            testimonials_url: home_tab.clone(),
            products_url: home_tab,
            about_url: sheet_url("1090980362"),
            special_offers_url: sheet_url("568011479"),
            menu_url: sheet_url("0"),
            contact_url: sheet_url("1774824803"),
            custom_order_url: sheet_url("1825937196"),
            legal_url: sheet_url("664877592"),
        }
    }
}

impl SheetRegistry {
    /// Layered load: built-in defaults, then `Sheetfed.toml`, then
    /// `SHEETFED_*` environment variables.
    pub fn load() -> Result<Self> {
        let registry: SheetRegistry = Figment::new()
            .merge(Serialized::defaults(SheetRegistry::default()))
            .merge(Toml::file("Sheetfed.toml"))
            .merge(Env::prefixed("SHEETFED_"))
            .extract()?;
        Ok(registry)
    }

    /// Resolves the export URL for `domain`.
    ///
    /// An empty value or a `YOUR_...` placeholder left over from setup
    /// is a configuration error, not a fetch error.
    pub fn url_for(&self, domain: SheetDomain) -> Result<&str> {
        let url = match domain {
            SheetDomain::Website => &self.website_url,
            SheetDomain::Hero => &self.hero_url,
            SheetDomain::HomeIntro => &self.home_intro_url,
            SheetDomain::Testimonials => &self.testimonials_url,
            SheetDomain::Products => &self.products_url,
            SheetDomain::About => &self.about_url,
            SheetDomain::SpecialOffers => &self.special_offers_url,
            SheetDomain::Menu => &self.menu_url,
            SheetDomain::Contact => &self.contact_url,
            SheetDomain::CustomOrder => &self.custom_order_url,
            SheetDomain::Legal => &self.legal_url,
        };

        if url.is_empty() || url.starts_with("YOUR_") {
            return Err(AppError::ConfigError(format!(
                "Sheet URL for {} is not configured",
                domain
            )));
        }

        Ok(url)
    }
}
