use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::JwtClaims;
use crate::models::user::User;
use crate::utils::errors::AppError;

/// Configuración JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

impl JwtConfig {
    pub fn from_environment(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(config.jwt_expiration_hours),
        }
    }
}

/// Servicio JWT
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Duración del token en segundos
    pub fn expires_in(&self) -> i64 {
        self.config.access_token_duration.num_seconds()
    }

    /// Genera un token de acceso
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + self.config.access_token_duration;

        let claims = JwtClaims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            account_type: user.account_type.as_str().to_string(),
            roles: user.roles.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Error generating access token: {}", e)))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::RemoteUser;

    fn service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret".to_string(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(1),
        })
    }

    fn user() -> User {
        User::from_remote(
            RemoteUser {
                id: "42".to_string(),
                nome: "Oficina Central".to_string(),
                ..Default::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = service();
        let token = jwt_service.generate_access_token(&user()).unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.name, "Oficina Central");
        assert_eq!(claims.account_type, "Owner");
        assert!(claims.roles.iter().any(|r| r == "mechanic"));
        assert_eq!(jwt_service.expires_in(), 3600);
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let other = JwtService::new(JwtConfig {
            secret: "other-secret".to_string(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(1),
        });
        let token = other.generate_access_token(&user()).unwrap();
        assert!(service().validate_token(&token).is_err());
        assert!(service().validate_token("not-a-token").is_err());
    }
}
