use crate::application::extract::{column_records, text};
use crate::application::map_embed::extract_maps_embed_url;
use crate::domain::content::{ContactConfig, FaqItem};
use crate::infrastructure::sheets::{parse_key_values, parse_lines};

pub(crate) fn transform(csv: &str) -> Option<ContactConfig> {
    let rows = parse_lines(csv);
    if rows.is_empty() {
        return None;
    }

    let map = parse_key_values(csv);

    // FAQ answers line up with questions by column index; a slot with only
    // one of the two still renders so authors notice the gap.
    let faqs = column_records(&rows, &[("FAQ Question", "question"), ("FAQ Answer", "answer")])
        .into_iter()
        .map(|(number, fields)| FaqItem {
            id: format!("faq-{}", number),
            question: fields.get("question").cloned().unwrap_or_default(),
            answer: fields.get("answer").cloned().unwrap_or_default(),
        })
        .collect();

    let map_embed_url = extract_maps_embed_url(&text(&map, "Contact Map url Location", ""))
        .unwrap_or_default();

    Some(ContactConfig {
        hero_image_desktop: text(&map, "Contact Hero Desktop Image", ""),
        hero_image_mobile: text(&map, "Contact Hero Mobile Image", ""),
        hero_title_black: text(&map, "Contact Hero Title Black", "Ready to"),
        hero_title_orange: text(&map, "Contact Hero Title Orange", "Order?"),
        hero_phrase: text(&map, "Contact Hero Phrase", "We'd love to hear from you"),

        contact_box_title: text(&map, "Contact Box Title", "Contact Information"),
        address_title: text(&map, "Address Title", "Address"),
        address_info: text(&map, "Address Info", "123 Baker Street, Sweetville, CA 90210"),
        phone_title: text(&map, "Phone Title", "Phone"),
        phone_info: text(&map, "Phone Info", "(555) 123-4567"),
        email_title: text(&map, "Email Title", "Email"),
        email_info: text(&map, "Email Info", "hello@artisanbaking.com"),
        hours_title: text(&map, "Hours Title", "Hours"),
        hours_info: text(&map, "Hours Info", "Mon-Fri: 7AM-6PM\nSat: 8AM-4PM\nSun: 9AM-2PM"),

        map_title: text(&map, "Contact Map Title", "Our Location"),
        map_description: text(&map, "Contact Map Description", ""),
        map_embed_url,

        faq_title: text(&map, "FAQ Title", "Frequently Asked Questions"),
        faqs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faqs_zip_questions_and_answers_by_column() {
        let csv = "Contact Box Title,Say Hello\n\
                   FAQ Question,How long?,Do you deliver?\n\
                   FAQ Answer,Two weeks,Yes";
        let config = transform(csv).unwrap();
        assert_eq!(config.contact_box_title, "Say Hello");
        assert_eq!(config.faqs.len(), 2);
        assert_eq!(config.faqs[0].id, "faq-1");
        assert_eq!(config.faqs[0].question, "How long?");
        assert_eq!(config.faqs[0].answer, "Two weeks");
        assert_eq!(config.faqs[1].id, "faq-2");
        assert_eq!(config.faqs[1].answer, "Yes");
    }

    #[test]
    fn test_faq_with_missing_answer_is_kept() {
        let csv = "FAQ Question,Only a question,";
        let config = transform(csv).unwrap();
        assert_eq!(config.faqs.len(), 1);
        assert_eq!(config.faqs[0].question, "Only a question");
        assert_eq!(config.faqs[0].answer, "");
    }

    #[test]
    fn test_map_embed_url_is_normalized_from_iframe() {
        let csv = "Contact Map url Location,\"<iframe src=\"\"https://www.google.com/maps/embed?pb=!1m18\"\"></iframe>\"";
        let config = transform(csv).unwrap();
        assert_eq!(config.map_embed_url, "https://www.google.com/maps/embed?pb=!1m18");
    }

    #[test]
    fn test_invalid_map_value_becomes_empty() {
        let csv = "Contact Map url Location,not a url";
        let config = transform(csv).unwrap();
        assert_eq!(config.map_embed_url, "");
    }

    #[test]
    fn test_empty_sheet_yields_none() {
        assert!(transform("").is_none());
    }
}
