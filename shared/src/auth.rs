//! Auth types shared between the client and its consumers
//!
//! The API issues bearer tokens from a form-encoded login endpoint; every
//! other request carries the token in an `Authorization` header.

use serde::{Deserialize, Serialize};

/// Token response from `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Merchandiser,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub retail_partner_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_parses_oauth_shape() {
        let json = serde_json::json!({
            "access_token": "abc.def.ghi",
            "token_type": "bearer"
        });
        let token: TokenResponse = serde_json::from_value(json).unwrap();
        assert_eq!(token.access_token, "abc.def.ghi");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn user_role_is_lowercase_on_the_wire() {
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
