//! Modelo de usuario autenticado
//!
//! El usuario viene del servicio externo de verificación; los campos que
//! el servicio no manda se completan con los valores por defecto de la
//! consola.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tipo de cuenta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountType {
    #[default]
    Owner,
    Collaborator,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Owner => "Owner",
            AccountType::Collaborator => "Collaborator",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Owner" => Some(AccountType::Owner),
            "Collaborator" => Some(AccountType::Collaborator),
            _ => None,
        }
    }
}

/// Usuario tal como lo responde el endpoint de verificación
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RemoteUser {
    pub id: String,
    pub nome: String,
    pub email: Option<String>,
    pub tipo_de_conta: Option<String>,
    pub telefone: Option<String>,
    pub data_criacao: Option<String>,
    pub roles: Option<Vec<String>>,
    pub ativo: Option<bool>,
}

/// Usuario de la consola
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
    pub phone: String,
    pub roles: Vec<String>,
    pub active: bool,
    pub created_at: String,
    pub last_login: DateTime<Utc>,
}

pub const DEFAULT_EMAIL: &str = "usuario@exemplo.com";
pub const DEFAULT_PHONE: &str = "+55 11 99999-9999";

impl User {
    /// Completa un `RemoteUser` con los valores por defecto
    pub fn from_remote(remote: RemoteUser, now: DateTime<Utc>) -> Self {
        Self {
            id: remote.id,
            name: remote.nome,
            email: remote.email.unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            account_type: remote
                .tipo_de_conta
                .as_deref()
                .and_then(AccountType::from_str)
                .unwrap_or_default(),
            phone: remote.telefone.unwrap_or_else(|| DEFAULT_PHONE.to_string()),
            roles: remote
                .roles
                .unwrap_or_else(|| vec!["admin".to_string(), "mechanic".to_string()]),
            active: remote.ativo.unwrap_or(true),
            created_at: remote.data_criacao.unwrap_or_else(|| now.to_rfc3339()),
            last_login: now,
        }
    }
}
