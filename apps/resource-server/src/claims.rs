//! UserInfo claim values for the users in [`UserDirectory`].
//!
//! The authorization service tells us which claims the client may see;
//! this module only answers "what is the value of claim X for user Y".
//! Requested names may carry a language tag (`name#ja`). Records here have
//! no localized variants, so the tag is accepted and ignored, but the value
//! is reported under the full requested key.

use serde_json::{Map, Value};

use crate::users::{UserDirectory, UserRecord};

/// The standard claims this server can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardClaim {
    Name,
    Email,
    Address,
    PhoneNumber,
}

impl StandardClaim {
    pub const ALL: [StandardClaim; 4] = [
        Self::Name,
        Self::Email,
        Self::Address,
        Self::PhoneNumber,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::PhoneNumber => "phone_number",
        }
    }

    /// `None` for any claim name outside the supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|claim| claim.as_str() == name)
    }

    fn value_of(self, user: &UserRecord) -> Value {
        match self {
            Self::Name => Value::String(user.name.clone()),
            Self::Email => Value::String(user.email.clone()),
            Self::Address => serde_json::to_value(&user.address).unwrap_or(Value::Null),
            Self::PhoneNumber => Value::String(user.phone_number.clone()),
        }
    }
}

/// Split `name#tag` into the claim name and its optional language tag.
pub fn split_language_tag(requested: &str) -> (&str, Option<&str>) {
    match requested.split_once('#') {
        Some((name, tag)) => (name, Some(tag)),
        None => (requested, None),
    }
}

/// Value of `claim_name` for `user`.
///
/// `None` when the user could not be resolved or the claim is unsupported.
pub fn user_claim(
    user: Option<&UserRecord>,
    claim_name: &str,
    _language_tag: Option<&str>,
) -> Option<Value> {
    let user = user?;
    StandardClaim::from_name(claim_name).map(|claim| claim.value_of(user))
}

/// Supplies claim values to the UserInfo flow.
pub trait ClaimsProvider: Send + Sync {
    /// Values for the requested claims of `subject`; claims without a value are omitted.
    fn collect_claims(&self, subject: Option<&str>, claim_names: &[String]) -> Map<String, Value>;
}

/// [`ClaimsProvider`] over an in-memory [`UserDirectory`].
pub struct DirectoryClaimsProvider<'a> {
    directory: &'a UserDirectory,
}

impl<'a> DirectoryClaimsProvider<'a> {
    pub fn new(directory: &'a UserDirectory) -> Self {
        Self { directory }
    }
}

impl ClaimsProvider for DirectoryClaimsProvider<'_> {
    fn collect_claims(&self, subject: Option<&str>, claim_names: &[String]) -> Map<String, Value> {
        let user = subject.and_then(|s| self.directory.find_by_subject(s));

        claim_names
            .iter()
            .filter_map(|requested| {
                let (name, tag) = split_language_tag(requested);
                if name.is_empty() {
                    return None;
                }
                user_claim(user, name, tag).map(|value| (requested.clone(), value))
            })
            .collect()
    }
}
