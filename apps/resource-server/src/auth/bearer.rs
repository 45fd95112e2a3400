//! Access token extraction rules from RFC 6750, section 2.
//!
//! A token may arrive in the `Authorization` header or in an `access_token`
//! request parameter. The header always wins: when it is present, the
//! parameter is not consulted, even if the header does not hold a usable
//! Bearer credential.

/// Parse `Bearer <token>` (scheme is case-insensitive).
///
/// Returns `None` for other schemes, a missing token, or trailing garbage.
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    let mut parts = header_value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    Some(token)
}

/// Pick the access token to validate.
///
/// `authorization` is the raw header value if the header was sent at all;
/// `parameter` is the `access_token` query or form value, used verbatim.
pub fn select_access_token(authorization: Option<&str>, parameter: Option<String>) -> Option<String> {
    match authorization {
        Some(header_value) => parse_bearer(header_value).map(str::to_owned),
        None => parameter,
    }
}
