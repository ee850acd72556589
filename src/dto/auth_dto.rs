use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;
use crate::utils::validation::validate_not_blank;

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validate_not_blank")]
    pub id: String,
    #[serde(alias = "senha")]
    #[validate(length(min = 1))]
    pub password: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn success(token: String, expires_in: i64, user: User) -> Self {
        Self {
            success: true,
            token: Some(token),
            expires_in: Some(expires_in),
            user: Some(user),
            message: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            token: None,
            expires_in: None,
            user: None,
            message: Some(message.to_string()),
        }
    }
}
