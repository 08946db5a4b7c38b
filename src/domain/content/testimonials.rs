use serde::{Deserialize, Serialize};

/// Testimonials block: section titles, the testimonial cards and the
/// rating banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsConfig {
    pub section: TestimonialSection,
    pub testimonials: Vec<Testimonial>,
    pub banner: TestimonialBanner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialSection {
    pub small_title: String,
    pub black_title: String,
    pub orange_title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialBanner {
    pub title: String,
    pub text_top: String,
    pub text_bottom: String,
}

impl Default for TestimonialSection {
    fn default() -> Self {
        Self {
            small_title: "Testimonials".to_string(),
            black_title: "What Our".to_string(),
            orange_title: "Customers Say".to_string(),
            description: "Don't just take our word for it - hear from our satisfied \
                          customers who have experienced our delicious baked goods and \
                          exceptional service."
                .to_string(),
        }
    }
}

impl Default for TestimonialBanner {
    fn default() -> Self {
        Self {
            title: "Overall Rating".to_string(),
            text_top: "4.9 out of 5 stars".to_string(),
            text_bottom: "Based on 500+ customer reviews".to_string(),
        }
    }
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            section: TestimonialSection::default(),
            testimonials: vec![
                Testimonial {
                    name: "Sarah Johnson".to_string(),
                    role: "Wedding Client".to_string(),
                    content: "The wedding cake was absolutely stunning! Not only did it look \
                              perfect, but it tasted incredible. Our guests couldn't stop \
                              raving about it. Thank you for making our special day even \
                              more memorable!"
                        .to_string(),
                    rating: 5,
                },
                Testimonial {
                    name: "Michael Chen".to_string(),
                    role: "Regular Customer".to_string(),
                    content: "I've been coming here for their sourdough bread for over 2 \
                              years now. It's consistently amazing - crispy crust, perfect \
                              texture, and that authentic sourdough flavor. Best bakery in \
                              town!"
                        .to_string(),
                    rating: 5,
                },
                Testimonial {
                    name: "Emily Rodriguez".to_string(),
                    role: "Birthday Party Host".to_string(),
                    content: "Ordered cupcakes for my daughter's birthday party and they \
                              were a huge hit! The decorations were beautiful and the \
                              flavors were delicious. The kids loved them and so did the \
                              adults!"
                        .to_string(),
                    rating: 5,
                },
            ],
            banner: TestimonialBanner::default(),
        }
    }
}
