//! In-memory user directory backing the UserInfo claims.
//!
//! There is no user store; a fixed set of records is built at startup and
//! never mutated.

use serde::Serialize;

/// Postal address in the shape of the OIDC `address` claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub subject: String,
    pub name: String,
    pub email: String,
    pub address: Address,
    pub phone_number: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// The single stand-in user served by this deployment.
    pub fn with_dummy_users() -> Self {
        Self::new(vec![UserRecord {
            subject: "1001".to_string(),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            address: Address {
                country: Some("USA".to_string()),
                ..Address::default()
            },
            phone_number: "+1 (425) 555-1212".to_string(),
        }])
    }

    pub fn find_by_subject(&self, subject: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.subject == subject)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
