//! JSON extraction from free-form model replies.

use regex::Regex;

/// Finds the first brace-delimited JSON object anywhere in `text`.
///
/// Greedy match from the first `{` to the last `}`, so prose before or
/// after the object is tolerated. Returns `None` when no braces are found;
/// whether the slice actually parses is the caller's concern.
#[must_use]
pub fn first_json_object(text: &str) -> Option<&str> {
    let re = Regex::new(r"(?s)\{.*\}").expect("valid object regex");
    re.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_object_is_returned_whole() {
        let text = r#"{"deniz_manzarasi": true}"#;
        assert_eq!(first_json_object(text), Some(text));
    }

    #[test]
    fn surrounding_prose_is_stripped() {
        let text = r#"Sure, here: {"deniz_manzarasi": true} thanks"#;
        assert_eq!(first_json_object(text), Some(r#"{"deniz_manzarasi": true}"#));
    }

    #[test]
    fn match_spans_first_open_to_last_close() {
        let text = r#"a {"x": {"y": 1}} b"#;
        assert_eq!(first_json_object(text), Some(r#"{"x": {"y": 1}}"#));
    }

    #[test]
    fn multiline_objects_are_matched() {
        let text = "cevap:\n{\n  \"koltuk_var_mi\": true\n}\n";
        assert_eq!(
            first_json_object(text),
            Some("{\n  \"koltuk_var_mi\": true\n}")
        );
    }

    #[test]
    fn no_braces_is_none() {
        assert_eq!(first_json_object("maalesef analiz edemedim"), None);
        assert_eq!(first_json_object(""), None);
    }
}
