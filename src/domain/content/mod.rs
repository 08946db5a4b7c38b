// Typed configuration objects, one per content domain.
//
// Every field carries a hardcoded fallback; `Default` on each type is the
// fully-populated fallback object returned when a sheet cannot be fetched
// and no cached copy exists. Consumers never see a partially-missing config.

pub mod about;
pub mod contact;
pub mod custom_order;
pub mod hero;
pub mod home_intro;
pub mod legal;
pub mod menu;
pub mod products;
pub mod special_offers;
pub mod testimonials;
pub mod website;

pub use about::AboutConfig;
pub use contact::{ContactConfig, FaqItem};
pub use custom_order::{CustomOrderConfig, CustomOrderForm};
pub use hero::HeroConfig;
pub use home_intro::{HomeIntroConfig, IntroStat};
pub use legal::{LegalConfig, ServiceSection};
pub use menu::{MenuCategory, MenuItem};
pub use products::{ProductSlide, ProductsConfig, ProductsOffer, ProductsSection};
pub use special_offers::{SpecialOffer, SpecialOffersConfig};
pub use testimonials::{Testimonial, TestimonialBanner, TestimonialSection, TestimonialsConfig};
pub use website::{FooterConfig, NavigationConfig, SiteMetadata, SocialMediaConfig, WebsiteConfig};
