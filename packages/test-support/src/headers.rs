//! Header assertions for relayed responses.
//!
//! Relayed responses must carry exactly the headers the authorization
//! service produced, so these helpers compare whole header sets rather
//! than probing single values.

use actix_web::http::header::HeaderMap;

/// All values of `name`, in the order they were appended.
pub fn header_values(headers: &HeaderMap, name: &str) -> Vec<String> {
    headers
        .get_all(name)
        .map(|v| v.to_str().unwrap_or("<non-utf8>").to_string())
        .collect()
}

/// Every `(name, value)` pair, lowercased names, grouped by name.
///
/// Values under the same name keep their original relative order.
pub fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_ascii_lowercase(),
                value.to_str().unwrap_or("<non-utf8>").to_string(),
            )
        })
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

/// Assert that `headers` holds exactly `expected`, nothing more.
pub fn assert_exact_headers(headers: &HeaderMap, expected: &[(&str, &str)]) {
    let mut expected_pairs: Vec<(String, String)> = expected
        .iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
        .collect();
    expected_pairs.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        header_pairs(headers),
        expected_pairs,
        "relayed headers differ from the authorization service's headers"
    );
}
