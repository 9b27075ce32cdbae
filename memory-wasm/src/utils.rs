use wasm_bindgen::JsValue;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    match percent_encoding::percent_decode_str(&s).decode_utf8() {
        Ok(decoded) => decoded.to_string(),
        Err(_) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_requested_key() {
        assert_eq!(get_query_param("?level=2", "level"), Some("2".to_string()));
        assert_eq!(
            get_query_param("?a=b&level=1", "level"),
            Some("1".to_string())
        );
        assert_eq!(get_query_param("?level", "level"), Some(String::new()));
    }

    #[test]
    fn missing_keys_yield_none() {
        assert_eq!(get_query_param("", "level"), None);
        assert_eq!(get_query_param("?a=b", "level"), None);
    }

    #[test]
    fn values_are_decoded() {
        assert_eq!(
            get_query_param("?q=one+two", "q"),
            Some("one two".to_string())
        );
        assert_eq!(get_query_param("?q=1%32", "q"), Some("12".to_string()));
    }
}
