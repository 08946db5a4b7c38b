use crate::application::extract::{numbered_records, text};
use crate::domain::content::{Testimonial, TestimonialBanner, TestimonialSection, TestimonialsConfig};
use crate::infrastructure::sheets::{parse_key_values, parse_lines};

const RECORD_PREFIXES: &[&str] = &[
    "Testimonial Name",
    "Testimonial Name Label",
    "Testimonial Quote",
];

pub(crate) fn transform(csv: &str) -> Option<TestimonialsConfig> {
    let rows = parse_lines(csv);
    if rows.is_empty() {
        return None;
    }

    let map = parse_key_values(csv);

    let testimonials: Vec<Testimonial> = numbered_records(&rows, RECORD_PREFIXES)
        .iter()
        .filter(|r| r.contains_key("testimonial_name") && r.contains_key("testimonial_quote"))
        .map(|r| Testimonial {
            name: r.get("testimonial_name").cloned().unwrap_or_default(),
            role: r
                .get("testimonial_name_label")
                .cloned()
                .unwrap_or_else(|| "Happy Customer".to_string()),
            content: r.get("testimonial_quote").cloned().unwrap_or_default(),
            rating: 5,
        })
        .collect();

    let testimonials = if testimonials.is_empty() {
        TestimonialsConfig::default().testimonials
    } else {
        testimonials
    };

    let d = TestimonialSection::default();
    let d_banner = TestimonialBanner::default();

    Some(TestimonialsConfig {
        section: TestimonialSection {
            small_title: text(&map, "Testimonial Small Title", &d.small_title),
            black_title: text(&map, "Testimonial Black Title", &d.black_title),
            orange_title: text(&map, "Testimonial Orange Title", &d.orange_title),
            description: text(&map, "Testimonial Description", &d.description),
        },
        testimonials,
        banner: TestimonialBanner {
            title: text(&map, "Testimonial Banner Title", &d_banner.title),
            text_top: text(&map, "Testimonial Banner Text Top", &d_banner.text_top),
            text_bottom: text(&map, "Testimonial Banner Text Bottom", &d_banner.text_bottom),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_testimonials_fill_slots() {
        let csv = "Testimonial Name1,Ada\n\
                   Testimonial Quote1,Wonderful cakes\n\
                   Testimonial Name Label1,Regular\n\
                   Testimonial Name2,Grace\n\
                   Testimonial Quote2,Best bread in town";
        let config = transform(csv).unwrap();
        assert_eq!(config.testimonials.len(), 2);
        assert_eq!(config.testimonials[0].name, "Ada");
        assert_eq!(config.testimonials[0].role, "Regular");
        assert_eq!(config.testimonials[1].role, "Happy Customer");
        assert_eq!(config.testimonials[1].rating, 5);
    }

    #[test]
    fn test_slot_without_name_or_quote_is_dropped() {
        let csv = "Testimonial Name1,Ada\n\
                   Testimonial Quote2,Quote with no name\n\
                   Testimonial Name3,Lin\n\
                   Testimonial Quote3,Lovely";
        let config = transform(csv).unwrap();
        assert_eq!(config.testimonials.len(), 1);
        assert_eq!(config.testimonials[0].name, "Lin");
    }

    #[test]
    fn test_no_valid_testimonials_falls_back_to_defaults() {
        let csv = "Testimonial Small Title,Reviews";
        let config = transform(csv).unwrap();
        assert_eq!(config.section.small_title, "Reviews");
        assert_eq!(config.testimonials.len(), 3);
        assert_eq!(config.testimonials[0].name, "Sarah Johnson");
    }

    #[test]
    fn test_empty_sheet_yields_none() {
        assert!(transform("").is_none());
    }
}
