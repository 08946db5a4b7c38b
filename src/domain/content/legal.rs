use serde::{Deserialize, Serialize};

/// Legal pages: last-updated dates plus up to twelve numbered sections
/// shared between the privacy policy and terms of service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalConfig {
    pub privacy_policy_last_updated: String,
    pub terms_of_service_last_updated: String,
    pub services: Vec<ServiceSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSection {
    pub title: String,
    pub description: String,
}

impl ServiceSection {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Default for LegalConfig {
    fn default() -> Self {
        Self {
            privacy_policy_last_updated: "June 15, 2025".to_string(),
            terms_of_service_last_updated: "June 15, 2025".to_string(),
            services: vec![
                ServiceSection::new(
                    "1. Acceptance of Terms",
                    "By accessing and using this website, you accept and agree to be bound by \
                     the terms and provision of this agreement. If you do not agree to abide \
                     by the above, please do not use this service.",
                ),
                ServiceSection::new(
                    "2. Use License",
                    "Permission is granted to temporarily download one copy of the materials \
                     (information or software) on this website for personal, non-commercial \
                     transitory viewing only. This is the grant of a license, not a transfer \
                     of title, and under this license you may not modify or copy the \
                     materials, use the materials for any commercial purpose or for any \
                     public display, attempt to decompile or reverse engineer any software \
                     contained on the website, remove any copyright or other proprietary \
                     notations from the materials, or transfer the materials to another \
                     person or \"mirror\" the materials on any other server.",
                ),
                ServiceSection::new(
                    "3. Ordering and Payment",
                    "When placing orders through our website or other communication channels, \
                     all prices are subject to change without notice. Payment is required at \
                     the time of ordering unless otherwise agreed. We reserve the right to \
                     refuse service to anyone. Orders are not confirmed until payment is \
                     received and processed. We are not responsible for any errors in pricing \
                     or product descriptions.",
                ),
                ServiceSection::new(
                    "4. Delivery and Pickup",
                    "Delivery times are estimates and may vary based on circumstances. We are \
                     not responsible for delays due to weather, traffic, or other factors \
                     beyond our control. Customers are responsible for providing accurate \
                     delivery information. Items must be picked up within the specified \
                     timeframe or may be disposed of. Additional delivery fees may apply \
                     based on distance and order size.",
                ),
                ServiceSection::new(
                    "5. Cancellation and Refund Policy",
                    "Cancellations must be made within the specified timeframe (typically \
                     24-48 hours in advance). Late cancellations may result in partial or no \
                     refund. Refunds are processed according to our refund policy. We reserve \
                     the right to cancel orders due to circumstances beyond our control. \
                     Custom orders may have different cancellation terms.",
                ),
                ServiceSection::new(
                    "6. Allergen and Dietary Information",
                    "We handle common allergens in our kitchen. While we take precautions, we \
                     cannot guarantee allergen-free preparation. Customers with severe \
                     allergies should contact us directly. We are not liable for allergic \
                     reactions or dietary issues. Ingredient lists are available upon \
                     request.",
                ),
                ServiceSection::new(
                    "7. Product Quality and Satisfaction",
                    "We strive for quality and customer satisfaction. Products are made fresh \
                     to order when possible. We use high-quality ingredients and follow food \
                     safety guidelines. If you are not satisfied, please contact us within 24 \
                     hours. We will work to resolve any issues to your satisfaction. \
                     Photographs may not exactly represent final products.",
                ),
                ServiceSection::new(
                    "8. Privacy and Data Protection",
                    "Your privacy is important to us. Please review our Privacy Policy, which \
                     also governs your use of the website, to understand our practices.",
                ),
                ServiceSection::new(
                    "9. Limitation of Liability",
                    "In no event shall we or our suppliers be liable for any damages \
                     (including, without limitation, damages for loss of data or profit, or \
                     due to business interruption) arising out of the use or inability to use \
                     the materials on our website, even if we or our authorized \
                     representative has been notified orally or in writing of the possibility \
                     of such damage.",
                ),
                ServiceSection::new(
                    "10. Governing Law",
                    "These terms and conditions are governed by and construed in accordance \
                     with the laws of the jurisdiction in which our business operates, and \
                     you irrevocably submit to the exclusive jurisdiction of the courts in \
                     that location.",
                ),
                ServiceSection::new(
                    "11. Changes to Terms",
                    "We may revise these terms of service at any time without notice. By \
                     using this website, you are agreeing to be bound by the then current \
                     version of these terms of service.",
                ),
                ServiceSection::new(
                    "12. Contact Information",
                    "If you have any questions about these Terms of Service, please contact \
                     us through our website's contact page or using the contact information \
                     provided on our website.",
                ),
            ],
        }
    }
}
