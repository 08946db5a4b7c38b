/// Splits one line of CSV text into trimmed fields.
///
/// Double quotes wrap fields that contain commas; a doubled quote inside a
/// quoted field is one literal quote. Unbalanced quotes never fail: a
/// trailing unmatched quote absorbs the rest of the line into one field.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(tokenize_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(tokenize_line("  a , b ,c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_field_with_comma() {
        assert_eq!(tokenize_line("\"A, B\",value2"), vec!["A, B", "value2"]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            tokenize_line("\"She said \"\"hi\"\"\",x"),
            vec!["She said \"hi\"", "x"]
        );
    }

    #[test]
    fn test_trailing_unmatched_quote_absorbs_rest() {
        assert_eq!(tokenize_line("a,\"b,c,d"), vec!["a", "b,c,d"]);
    }

    #[test]
    fn test_empty_line_yields_single_empty_field() {
        assert_eq!(tokenize_line(""), vec![""]);
    }

    #[test]
    fn test_trailing_comma_yields_empty_last_field() {
        assert_eq!(tokenize_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_round_trip_for_unquoted_content() {
        let fields = tokenize_line("Nav Home,Home,extra");
        let rejoined = fields.join(",");
        assert_eq!(tokenize_line(&rejoined), fields);
    }
}
