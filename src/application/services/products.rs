use crate::application::extract::{column_records, text};
use crate::domain::content::{ProductSlide, ProductsConfig, ProductsOffer, ProductsSection};
use crate::infrastructure::sheets::{parse_key_values, parse_lines};

const SLIDE_HEADERS: &[(&str, &str)] = &[
    ("Product Slide Badge", "badge_title"),
    ("Product Slide Title", "main_title"),
    ("Product Slide Description", "description"),
    ("Product Slide Image", "image"),
];

pub(crate) fn transform(csv: &str) -> Option<ProductsConfig> {
    let rows = parse_lines(csv);
    if rows.is_empty() {
        return None;
    }

    let map = parse_key_values(csv);

    let slides: Vec<ProductSlide> = column_records(&rows, SLIDE_HEADERS)
        .into_values()
        .map(|fields| ProductSlide {
            badge_title: fields
                .get("badge_title")
                .cloned()
                .unwrap_or_else(|| "Category".to_string()),
            main_title: fields
                .get("main_title")
                .cloned()
                .unwrap_or_else(|| "Category".to_string()),
            description: fields
                .get("description")
                .cloned()
                .unwrap_or_else(|| "Description coming soon...".to_string()),
            image: fields.get("image").cloned().unwrap_or_default(),
        })
        .collect();

    let carousel_items = if slides.is_empty() {
        ProductsConfig::default().carousel_items
    } else {
        slides
    };

    let d_section = ProductsSection::default();
    let d_offer = ProductsOffer::default();

    Some(ProductsConfig {
        carousel_items,
        section: ProductsSection {
            small_title: text(&map, "Products Small Title", &d_section.small_title),
            black_title: text(&map, "Products Black Title", &d_section.black_title),
            orange_title: text(&map, "Products Orange Title", &d_section.orange_title),
            description: text(&map, "Products Description", &d_section.description),
        },
        special_offer: ProductsOffer {
            title: text(&map, "Special Offer Title", &d_offer.title),
            description: text(&map, "Special Offer Description", &d_offer.description),
            button_text: text(&map, "Special Offer Button Text", &d_offer.button_text),
            button_link: text(&map, "Special Offer Button Link", &d_offer.button_link),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_come_from_columns() {
        let csv = "Product Slide Badge,Breads,Cakes\n\
                   Product Slide Title,Artisan Breads,Custom Cakes\n\
                   Product Slide Description,Daily bakes,Any occasion\n\
                   Product Slide Image,/b.jpg,/c.jpg";
        let config = transform(csv).unwrap();
        assert_eq!(config.carousel_items.len(), 2);
        assert_eq!(config.carousel_items[0].badge_title, "Breads");
        assert_eq!(config.carousel_items[1].main_title, "Custom Cakes");
        assert_eq!(config.carousel_items[1].image, "/c.jpg");
    }

    #[test]
    fn test_partial_slide_gets_field_defaults() {
        let csv = "Product Slide Title,Lonely";
        let config = transform(csv).unwrap();
        assert_eq!(config.carousel_items.len(), 1);
        assert_eq!(config.carousel_items[0].main_title, "Lonely");
        assert_eq!(config.carousel_items[0].badge_title, "Category");
        assert_eq!(config.carousel_items[0].description, "Description coming soon...");
    }

    #[test]
    fn test_no_slides_falls_back_to_default_carousel() {
        let csv = "Products Small Title,Our Range";
        let config = transform(csv).unwrap();
        assert_eq!(config.section.small_title, "Our Range");
        assert_eq!(config.carousel_items.len(), 3);
        assert_eq!(config.carousel_items[0].badge_title, "Artisan Breads");
    }

    #[test]
    fn test_empty_sheet_yields_none() {
        assert!(transform("").is_none());
    }
}
