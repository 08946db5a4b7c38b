use serde::{Deserialize, Serialize};

/// One menu category with its items. The menu domain's fetch-failure
/// fallback is an empty category list, not a populated default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuCategory {
    pub title: String,
    pub description: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    pub description: String,
    pub popular: bool,
    pub on_sale: bool,
    pub seasonal: bool,
    pub order_button_text: String,
    pub order_link: Option<String>,
    pub photos: Vec<String>,
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            name: "Unnamed Item".to_string(),
            price: "$0.00".to_string(),
            description: String::new(),
            popular: false,
            on_sale: false,
            seasonal: false,
            order_button_text: "Order".to_string(),
            order_link: None,
            photos: Vec::new(),
        }
    }
}
