use std::collections::HashMap;

use crate::application::extract::column_categories;
use crate::domain::content::{MenuCategory, MenuItem};
use crate::infrastructure::sheets::parse_lines;

const ROW_LABELS: &[(&str, &str)] = &[
    ("Category Description", "category_description"),
    ("Item Name", "item_name"),
    ("Price", "price"),
    ("Description", "description"),
    ("Popular", "popular"),
    ("On Sale", "on_sale"),
    ("Seasonal", "seasonal"),
    ("Order Button Text", "order_button_text"),
    ("Order Link", "order_link"),
    ("Photos", "photos"),
];

fn flag(record: &HashMap<String, String>, field: &str) -> bool {
    record
        .get(field)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub(crate) fn transform(csv: &str) -> Option<Vec<MenuCategory>> {
    let rows = parse_lines(csv);
    let records = column_categories(&rows, ROW_LABELS);
    if records.is_empty() {
        return None;
    }

    let mut categories: Vec<MenuCategory> = Vec::new();

    for record in records {
        let title = match record.get("category") {
            Some(t) if !t.is_empty() => t.clone(),
            _ => continue,
        };
        let description = record.get("category_description").cloned().unwrap_or_default();

        let position = match categories.iter().position(|c| c.title == title) {
            Some(position) => {
                // The same category can span several columns with the
                // description repeated; a differing non-empty one wins.
                if !description.is_empty() && categories[position].description != description {
                    categories[position].description = description;
                }
                position
            }
            None => {
                categories.push(MenuCategory {
                    title,
                    description,
                    items: Vec::new(),
                });
                categories.len() - 1
            }
        };

        let item = MenuItem {
            name: match record.get("item_name") {
                Some(n) if !n.is_empty() => n.clone(),
                _ => "Unnamed Item".to_string(),
            },
            price: match record.get("price") {
                Some(p) if !p.is_empty() => p.clone(),
                _ => "$0.00".to_string(),
            },
            description: record.get("description").cloned().unwrap_or_default(),
            popular: flag(&record, "popular"),
            on_sale: flag(&record, "on_sale"),
            seasonal: flag(&record, "seasonal"),
            order_button_text: match record.get("order_button_text") {
                Some(t) if !t.is_empty() => t.clone(),
                _ => "Order".to_string(),
            },
            order_link: record.get("order_link").filter(|l| !l.is_empty()).cloned(),
            photos: record
                .get("photos")
                .map(|p| {
                    p.split(',')
                        .map(|url| url.trim().to_string())
                        .filter(|url| !url.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        };

        categories[position].items.push(item);
    }

    Some(categories)
}
