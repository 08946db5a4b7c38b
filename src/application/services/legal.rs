use crate::application::extract::text;
use crate::domain::content::{LegalConfig, ServiceSection};
use crate::infrastructure::sheets::parse_key_values;

pub(crate) fn transform(csv: &str) -> Option<LegalConfig> {
    let map = parse_key_values(csv);
    if map.is_empty() {
        return None;
    }

    // A section needs both a title and a description to render.
    let services = (1..=12)
        .filter_map(|i| {
            let title = map
                .get(&format!("Service Title{}", i))
                .filter(|s| !s.is_empty())?;
            let description = map
                .get(&format!("Service Description{}", i))
                .filter(|s| !s.is_empty())?;
            Some(ServiceSection::new(title.clone(), description.clone()))
        })
        .collect();

    Some(LegalConfig {
        privacy_policy_last_updated: text(&map, "Privacy Policy Last Updated Date", ""),
        terms_of_service_last_updated: text(&map, "Terms of Service Last Updated Date", ""),
        services,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_require_title_and_description() {
        let csv = "Service Title1,Terms\n\
                   Service Description1,The terms.\n\
                   Service Title2,Orphan\n\
                   Service Description3,Orphan too";
        let config = transform(csv).unwrap();
        assert_eq!(config.services.len(), 1);
        assert_eq!(config.services[0].title, "Terms");
    }

    #[test]
    fn test_dates_are_read() {
        let csv = "Privacy Policy Last Updated Date,July 1 2026\nTerms of Service Last Updated Date,July 2 2026";
        let config = transform(csv).unwrap();
        assert_eq!(config.privacy_policy_last_updated, "July 1 2026");
        assert_eq!(config.terms_of_service_last_updated, "July 2 2026");
    }

    #[test]
    fn test_empty_sheet_yields_none() {
        assert!(transform("").is_none());
    }
}
