use std::collections::HashMap;

use super::tokenizer::tokenize_line;

/// Tokenizes every non-blank line of a CSV export.
pub fn parse_lines(csv: &str) -> Vec<Vec<String>> {
    csv.trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(tokenize_line)
        .collect()
}

/// Reduces a key-value style sheet to a header → value map.
///
/// Each line contributes `field[0] -> field[1]` when it has at least two
/// fields; shorter lines are dropped. A header repeated on a later line
/// overwrites the earlier value (last-line-wins). Malformed input never
/// errors, it just yields fewer entries.
pub fn parse_key_values(csv: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for fields in parse_lines(csv) {
        if fields.len() >= 2 {
            let header = fields[0].clone();
            if !header.is_empty() {
                map.insert(header, fields[1].clone());
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_basic() {
        let csv = "Nav Home,Home\nNav About,About";
        let map = parse_key_values(csv);
        assert_eq!(map.get("Nav Home").map(String::as_str), Some("Home"));
        assert_eq!(map.get("Nav About").map(String::as_str), Some("About"));
    }

    #[test]
    fn test_duplicate_header_last_line_wins() {
        let csv = "Nav Home,First\nNav About,About\nNav Home,Second";
        let map = parse_key_values(csv);
        assert_eq!(map.get("Nav Home").map(String::as_str), Some("Second"));
    }

    #[test]
    fn test_short_lines_are_dropped() {
        let csv = "just-a-header\nNav Home,Home";
        let map = parse_key_values(csv);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_input_gives_empty_map() {
        assert!(parse_key_values("").is_empty());
        assert!(parse_key_values("\n\n  \n").is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let csv = "Nav Home,Home\n\n\nNav Menu,Menu\n";
        assert_eq!(parse_lines(csv).len(), 2);
    }

    #[test]
    fn test_quoted_value_with_comma_survives() {
        let csv = "Address Info,\"123 Baker Street, Sweetville\"";
        let map = parse_key_values(csv);
        assert_eq!(
            map.get("Address Info").map(String::as_str),
            Some("123 Baker Street, Sweetville")
        );
    }
}
