use serde::{Deserialize, Serialize};

/// Claims del JWT de sesión de la consola
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub name: String,
    pub email: String,
    pub account_type: String,
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}
