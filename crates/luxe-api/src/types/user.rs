//! Account types.

use serde::{Deserialize, Serialize};

use crate::token::SessionToken;

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street and number.
    #[serde(default)]
    pub street: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// State or region.
    #[serde(default)]
    pub state: String,
    /// Postal code.
    #[serde(default)]
    pub zip_code: String,
    /// Country.
    #[serde(default)]
    pub country: String,
}

/// The signed-in shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Default shipping address.
    #[serde(default)]
    pub address: Option<Address>,
    /// Role (`user` or `admin`).
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    /// Returns true for administrator accounts.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Email address.
    pub email: String,
    /// Plain password, sent over TLS only.
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plain password.
    pub password: String,
}

/// Profile fields the shopper may change.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New default address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Successful login or registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    /// Bearer token for subsequent calls.
    pub token: SessionToken,
    /// Profile of the authenticated user.
    #[serde(flatten)]
    pub user: UserProfile,
}
