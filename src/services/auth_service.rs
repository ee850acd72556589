//! Verificación de credenciales contra el servicio externo de usuarios
//!
//! Un solo intento con timeout y sin reintentos. La contraseña nunca se
//! registra en los logs.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::config::environment::EnvironmentConfig;
use crate::models::user::{RemoteUser, User};
use crate::utils::errors::{AppError, AppResult};

/// Verificador de credenciales
///
/// `Ok(None)` significa credenciales rechazadas; `Err` es una falla de
/// transporte o de formato del servicio.
#[async_trait]
pub trait AuthVerifier: Send + Sync {
    async fn verify(&self, id: &str, password: &str) -> AppResult<Option<User>>;
}

/// Cuerpo de respuesta de `/api/verify`
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    success: bool,
    user: Option<RemoteUser>,
}

/// Verificador HTTP (`GET <url>?id=..&senha=..`)
pub struct HttpAuthVerifier {
    client: Client,
    verify_url: String,
}

impl HttpAuthVerifier {
    pub fn new(verify_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Error creating HTTP client: {}", e)))?;

        Ok(Self { client, verify_url })
    }

    pub fn from_environment(config: &EnvironmentConfig) -> AppResult<Self> {
        Self::new(
            config.auth_verify_url.clone(),
            Duration::from_secs(config.auth_timeout_secs),
        )
    }

    fn request_url(&self, id: &str, password: &str) -> String {
        format!(
            "{}?id={}&senha={}",
            self.verify_url,
            urlencoding::encode(id),
            urlencoding::encode(password)
        )
    }
}

#[async_trait]
impl AuthVerifier for HttpAuthVerifier {
    async fn verify(&self, id: &str, password: &str) -> AppResult<Option<User>> {
        log::info!("🔐 Verificando credenciales de '{}'", id);

        let response = self
            .client
            .get(self.request_url(id, password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("❌ Verificación de '{}' respondió {}", id, status);
            return Err(AppError::ExternalApi(format!(
                "verify endpoint returned {}",
                status
            )));
        }

        let body: VerifyResponse = response.json().await?;
        match body {
            VerifyResponse {
                success: true,
                user: Some(remote),
            } => {
                log::info!("✅ Usuario '{}' verificado", remote.id);
                Ok(Some(User::from_remote(remote, Utc::now())))
            }
            _ => {
                log::warn!("❌ Credenciales rechazadas para '{}'", id);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_encodes_credentials() {
        let verifier = HttpAuthVerifier::new(
            "https://auth.example.com/api/verify".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(
            verifier.request_url("oficina@mail.com", "s&nh@ 1"),
            "https://auth.example.com/api/verify?id=oficina%40mail.com&senha=s%26nh%40%201"
        );
    }

    #[test]
    fn test_verify_response_without_user_is_rejection() {
        let body: VerifyResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!body.success);
        assert!(body.user.is_none());

        let body: VerifyResponse = serde_json::from_str(
            r#"{"success": true, "user": {"id": "1", "nome": "Oficina"}}"#,
        )
        .unwrap();
        assert_eq!(body.user.unwrap().nome, "Oficina");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let verifier = HttpAuthVerifier::new(
            "http://127.0.0.1:9/api/verify".to_string(),
            Duration::from_millis(500),
        )
        .unwrap();

        let result = verifier.verify("1", "TopSecretPw").await;
        match result {
            Err(err @ AppError::ExternalApi(_)) => {
                let message = err.to_string();
                assert!(!message.contains("TopSecretPw"), "{}", message);
                assert!(!message.contains("senha="), "{}", message);
            }
            other => panic!("expected ExternalApi error, got {:?}", other),
        }
    }
}
