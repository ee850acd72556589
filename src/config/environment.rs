//! Configuración de variables de entorno
//!
//! Todas las variables tienen un valor por defecto salvo `JWT_SECRET`
//! fuera de desarrollo. Un valor mal formado es un error de arranque.

use std::env;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_AUTH_VERIFY_URL: &str =
    "https://user-management-autogenius.vercel.app/api/verify";
/// Tope para `MAX_PHOTO_BYTES`
pub const MAX_PHOTO_BYTES_LIMIT: usize = 64 * 1024 * 1024;
const DEVELOPMENT_JWT_SECRET: &str = "oficina-dev-secret-change-me";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    /// Vacío = CORS permisivo
    pub cors_origins: Vec<String>,
    pub auth_verify_url: String,
    pub auth_timeout_secs: u64,
    pub seed_sample_data: bool,
    pub default_warranty_days: u32,
    pub default_quote_validity_days: u32,
    pub max_photo_bytes: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
            jwt_expiration_hours: 24,
            cors_origins: Vec::new(),
            auth_verify_url: DEFAULT_AUTH_VERIFY_URL.to_string(),
            auth_timeout_secs: 10,
            seed_sample_data: true,
            default_warranty_days: 90,
            default_quote_validity_days: 10,
            max_photo_bytes: 5 * 1024 * 1024,
        }
    }
}

impl EnvironmentConfig {
    /// Lee la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Lee la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let environment = var("ENVIRONMENT").unwrap_or(defaults.environment);
        let jwt_secret = match var("JWT_SECRET") {
            Some(secret) => secret,
            None if environment == "development" => defaults.jwt_secret,
            None => return Err(anyhow!("JWT_SECRET must be set outside development")),
        };

        Ok(Self {
            port: parse_or(&var, "PORT", defaults.port)?,
            host: var("HOST").unwrap_or(defaults.host),
            jwt_secret,
            jwt_expiration_hours: parse_in_range(
                &var,
                "JWT_EXPIRATION_HOURS",
                defaults.jwt_expiration_hours,
                1..=8760,
            )?,
            cors_origins: var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            auth_verify_url: var("AUTH_VERIFY_URL").unwrap_or(defaults.auth_verify_url),
            auth_timeout_secs: parse_or(&var, "AUTH_TIMEOUT_SECS", defaults.auth_timeout_secs)?,
            seed_sample_data: parse_or(&var, "SEED_SAMPLE_DATA", defaults.seed_sample_data)?,
            default_warranty_days: parse_in_range(
                &var,
                "DEFAULT_WARRANTY_DAYS",
                defaults.default_warranty_days,
                0..=3650,
            )?,
            default_quote_validity_days: parse_in_range(
                &var,
                "DEFAULT_QUOTE_VALIDITY_DAYS",
                defaults.default_quote_validity_days,
                1..=3650,
            )?,
            max_photo_bytes: parse_in_range(
                &var,
                "MAX_PHOTO_BYTES",
                defaults.max_photo_bytes,
                1..=MAX_PHOTO_BYTES_LIMIT,
            )?,
            environment,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_in_range<T, V>(var: &V, key: &str, default: T, range: RangeInclusive<T>) -> Result<T>
where
    T: FromStr + PartialOrd + fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
    V: Fn(&str) -> Option<String>,
{
    let value = parse_or(var, key, default)?;
    if !range.contains(&value) {
        return Err(anyhow!(
            "{} must be between {} and {}, got {}",
            key,
            range.start(),
            range.end(),
            value
        ));
    }
    Ok(value)
}

fn parse_or<T, V>(var: &V, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    V: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{} has an invalid value '{}'", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<EnvironmentConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_in_development() {
        let config = config_from(&[]).unwrap();
        assert!(config.is_development());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.auth_verify_url, DEFAULT_AUTH_VERIFY_URL);
        assert_eq!(config.default_quote_validity_days, 10);
        assert!(config.seed_sample_data);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_production_requires_secret() {
        assert!(config_from(&[("ENVIRONMENT", "production")]).is_err());
        let config = config_from(&[("ENVIRONMENT", "production"), ("JWT_SECRET", "s3cr3t")]).unwrap();
        assert!(config.is_production());
        assert_eq!(config.jwt_secret, "s3cr3t");
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let err = config_from(&[("PORT", "abc")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_out_of_range_values_are_errors() {
        for (key, value) in [
            ("JWT_EXPIRATION_HOURS", "9999999999999999"),
            ("JWT_EXPIRATION_HOURS", "-1"),
            ("JWT_EXPIRATION_HOURS", "0"),
            ("DEFAULT_QUOTE_VALIDITY_DAYS", "4000000000"),
            ("MAX_PHOTO_BYTES", "0"),
        ] {
            let err = config_from(&[(key, value)]).unwrap_err();
            assert!(err.to_string().contains(key), "{}", err);
        }

        let config = config_from(&[("JWT_EXPIRATION_HOURS", "8760")]).unwrap();
        assert_eq!(config.jwt_expiration_hours, 8760);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://localhost:3001, https://oficina.app"),
            ("SEED_SAMPLE_DATA", "false"),
            ("AUTH_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins.len(), 2);
        assert!(!config.seed_sample_data);
        assert_eq!(config.auth_timeout_secs, 3);
    }
}
