// ============================================================
// CONTENT SERVICE
// ============================================================
// One loader per content domain, all sharing the same fetch,
// cache-with-stale-fallback and default-config pipeline.

mod about;
mod contact;
mod custom_order;
mod hero;
mod home_intro;
mod legal;
mod menu;
mod products;
mod special_offers;
mod testimonials;
mod website;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::submit;
use crate::domain::content::{
    AboutConfig, ContactConfig, CustomOrderConfig, CustomOrderForm, HeroConfig, HomeIntroConfig,
    LegalConfig, MenuCategory, ProductsConfig, SpecialOffersConfig, TestimonialsConfig,
    WebsiteConfig,
};
use crate::domain::error::Result;
use crate::infrastructure::cache::SessionCache;
use crate::infrastructure::registry::{SheetDomain, SheetRegistry};
use crate::infrastructure::sheets::SheetFetcher;

/// Loads typed content configurations from published sheets.
///
/// Every loader follows the same path: fresh cache hit, otherwise fetch
/// and transform, otherwise stale cache, otherwise the hardcoded
/// defaults. Loaders never fail; a page always gets a usable config.
pub struct ContentService {
    fetcher: SheetFetcher,
    cache: SessionCache,
    registry: SheetRegistry,
}

impl ContentService {
    pub fn new(registry: SheetRegistry) -> Result<Self> {
        Ok(Self {
            fetcher: SheetFetcher::new()?,
            cache: SessionCache::new(),
            registry,
        })
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    pub fn registry(&self) -> &SheetRegistry {
        &self.registry
    }

    async fn load_domain<T>(
        &self,
        domain: SheetDomain,
        force_refresh: bool,
        transform: fn(&str) -> Option<T>,
    ) -> T
    where
        T: Serialize + DeserializeOwned + Default,
    {
        let key = domain.cache_key();

        if force_refresh {
            self.cache.clear(key);
        } else if let Some(cached) = self.cache.get::<T>(key) {
            tracing::debug!("Using cached {} configuration", domain);
            return cached;
        }

        let url = match self.registry.url_for(domain) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("{}", e);
                return T::default();
            }
        };

        let csv = match self.fetcher.fetch_csv(url).await {
            Ok(csv) => csv,
            Err(e) => {
                tracing::warn!("Failed to fetch {} sheet: {}", domain, e);
                if let Some(stale) = self.cache.get_stale::<T>(key) {
                    tracing::info!("Serving stale {} configuration after fetch failure", domain);
                    return stale;
                }
                return T::default();
            }
        };

        match transform(&csv) {
            Some(config) => {
                self.cache.set(key, &config);
                config
            }
            None => {
                tracing::warn!("No {} configuration found in sheet", domain);
                T::default()
            }
        }
    }

    pub async fn website_config(&self, force_refresh: bool) -> WebsiteConfig {
        self.load_domain(SheetDomain::Website, force_refresh, website::transform)
            .await
    }

    pub async fn hero_config(&self, force_refresh: bool) -> HeroConfig {
        self.load_domain(SheetDomain::Hero, force_refresh, hero::transform)
            .await
    }

    pub async fn home_intro_config(&self, force_refresh: bool) -> HomeIntroConfig {
        self.load_domain(SheetDomain::HomeIntro, force_refresh, home_intro::transform)
            .await
    }

    pub async fn testimonials_config(&self, force_refresh: bool) -> TestimonialsConfig {
        self.load_domain(
            SheetDomain::Testimonials,
            force_refresh,
            testimonials::transform,
        )
        .await
    }

    pub async fn products_config(&self, force_refresh: bool) -> ProductsConfig {
        self.load_domain(SheetDomain::Products, force_refresh, products::transform)
            .await
    }

    pub async fn about_config(&self, force_refresh: bool) -> AboutConfig {
        self.load_domain(SheetDomain::About, force_refresh, about::transform)
            .await
    }

    pub async fn special_offers_config(&self, force_refresh: bool) -> SpecialOffersConfig {
        self.load_domain(
            SheetDomain::SpecialOffers,
            force_refresh,
            special_offers::transform,
        )
        .await
    }

    /// The menu's failure fallback is an empty list, not sample content.
    pub async fn menu_categories(&self, force_refresh: bool) -> Vec<MenuCategory> {
        self.load_domain(SheetDomain::Menu, force_refresh, menu::transform)
            .await
    }

    pub async fn contact_config(&self, force_refresh: bool) -> ContactConfig {
        self.load_domain(SheetDomain::Contact, force_refresh, contact::transform)
            .await
    }

    pub async fn custom_order_config(&self, force_refresh: bool) -> CustomOrderConfig {
        self.load_domain(
            SheetDomain::CustomOrder,
            force_refresh,
            custom_order::transform,
        )
        .await
    }

    pub async fn legal_config(&self, force_refresh: bool) -> LegalConfig {
        self.load_domain(SheetDomain::Legal, force_refresh, legal::transform)
            .await
    }

    /// Posts a custom order form to the endpoint named by the custom
    /// order sheet.
    pub async fn submit_custom_order(&self, form: &CustomOrderForm) -> Result<()> {
        let config = self.custom_order_config(false).await;
        submit::submit_custom_order(&self.fetcher, &config.apps_script_url, form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with(registry: SheetRegistry) -> ContentService {
        ContentService::new(registry).unwrap()
    }

    fn unconfigured_registry() -> SheetRegistry {
        SheetRegistry {
            website_url: String::new(),
            hero_url: String::new(),
            home_intro_url: String::new(),
            testimonials_url: String::new(),
            products_url: String::new(),
            about_url: String::new(),
            special_offers_url: String::new(),
            menu_url: String::new(),
            contact_url: String::new(),
            custom_order_url: String::new(),
            legal_url: String::new(),
        }
    }

    fn unreachable_registry() -> SheetRegistry {
        // Port 9 (discard) refuses connections, so every fetch fails fast.
        let mut registry = unconfigured_registry();
        registry.hero_url = "http://127.0.0.1:9/".to_string();
        registry
    }

    #[tokio::test]
    async fn test_unconfigured_url_falls_back_to_defaults() {
        let service = service_with(unconfigured_registry());
        let hero = service.hero_config(false).await;
        assert_eq!(hero.title_black, "Artisanal");
        assert_eq!(hero.title_orange, "Baking");
        let menu = service.menu_categories(false).await;
        assert!(menu.is_empty());
    }

    #[tokio::test]
    async fn test_fresh_cache_hit_skips_fetch() {
        let service = service_with(unconfigured_registry());
        let cached = HeroConfig {
            title_black: "Cached".to_string(),
            ..HeroConfig::default()
        };
        service
            .cache()
            .set(SheetDomain::Hero.cache_key(), &cached);

        let hero = service.hero_config(false).await;
        assert_eq!(hero.title_black, "Cached");
    }

    #[tokio::test]
    async fn test_force_refresh_discards_cached_value() {
        let service = service_with(unconfigured_registry());
        let cached = HeroConfig {
            title_black: "Cached".to_string(),
            ..HeroConfig::default()
        };
        service
            .cache()
            .set(SheetDomain::Hero.cache_key(), &cached);

        // No URL configured, so after the forced clear only defaults remain.
        let hero = service.hero_config(true).await;
        assert_eq!(hero.title_black, "Artisanal");
        assert!(service
            .cache()
            .get_stale::<HeroConfig>(SheetDomain::Hero.cache_key())
            .is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_without_cache_yields_defaults() {
        let service = service_with(unreachable_registry());
        let hero = service.hero_config(false).await;
        assert_eq!(hero.title_black, "Artisanal");
        assert_eq!(hero.title_orange, "Baking");
    }

    #[tokio::test]
    async fn test_fetch_failure_serves_stale_cache() {
        use crate::infrastructure::cache::CACHE_DURATION_MS;

        let service = service_with(unreachable_registry());
        let stale = HeroConfig {
            title_black: "Stale".to_string(),
            ..HeroConfig::default()
        };
        // Age the entry past the TTL so the fresh-cache check skips it.
        service
            .cache()
            .set_at(SheetDomain::Hero.cache_key(), &stale, 0);
        assert!(service
            .cache()
            .get_at::<HeroConfig>(SheetDomain::Hero.cache_key(), CACHE_DURATION_MS)
            .is_none());

        let hero = service.hero_config(false).await;
        assert_eq!(hero.title_black, "Stale");
    }

    #[tokio::test]
    async fn test_submit_without_endpoint_is_config_error() {
        let service = service_with(unconfigured_registry());
        let result = service.submit_custom_order(&CustomOrderForm::default()).await;
        assert!(result.is_err());
    }
}
