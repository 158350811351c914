/*
[INPUT]:  User object produced by the authentication provider
[OUTPUT]: UserProfile with display accessors tolerant of field casing
[POS]:    Auth layer - profile model
[UPDATE]: When the provider's profile schema is confirmed or changes
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::parse_timestamp;

const ANONYMOUS_NAME: &str = "User";
const MISSING_PHONE: &str = "Not provided";

/// Profile returned by a successful sign-in.
///
/// The provider has been seen to emit both `firstName` and `Name`; neither is
/// treated as authoritative, accessors fall back between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "emailAddress", default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(rename = "Phone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "LastLoginDate", default, skip_serializing_if = "Option::is_none")]
    pub last_login_date: Option<String>,
    #[serde(rename = "CreatedOn", default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    /// Any other provider fields, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

impl UserProfile {
    /// Short greeting name: `firstName`, then `Name`, then "User"
    pub fn display_name(&self) -> &str {
        present(&self.first_name)
            .or_else(|| present(&self.name))
            .unwrap_or(ANONYMOUS_NAME)
    }

    /// `Name`, else first and last name joined
    pub fn full_name(&self) -> String {
        if let Some(name) = present(&self.name) {
            return name.to_string();
        }
        format!(
            "{} {}",
            present(&self.first_name).unwrap_or_default(),
            present(&self.last_name).unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email).or_else(|| present(&self.email_address))
    }

    pub fn phone(&self) -> &str {
        present(&self.phone).unwrap_or(MISSING_PHONE)
    }

    pub fn last_login(&self) -> Option<DateTime<Utc>> {
        self.last_login_date.as_deref().and_then(parse_timestamp)
    }

    pub fn created_on(&self) -> Option<DateTime<Utc>> {
        self.created_on.as_deref().and_then(parse_timestamp)
    }
}
