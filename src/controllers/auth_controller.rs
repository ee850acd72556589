use std::sync::Arc;

use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::services::auth_service::AuthVerifier;
use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

const LOGIN_FAILED: &str = "ID ou senha incorretos";

pub struct AuthController {
    verifier: Arc<dyn AuthVerifier>,
    jwt: Arc<JwtService>,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            verifier: state.auth_verifier.clone(),
            jwt: state.jwt.clone(),
        }
    }

    /// Verifica las credenciales afuera y emite el token de sesión.
    /// Cualquier falla del servicio externo es un login fallido.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let user = match self.verifier.verify(request.id.trim(), &request.password).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AppError::Unauthorized(LOGIN_FAILED.to_string())),
            Err(e) => {
                tracing::error!("❌ Falla verificando credenciales: {}", e);
                return Err(AppError::Unauthorized(LOGIN_FAILED.to_string()));
            }
        };

        if !user.active {
            return Err(AppError::Forbidden("Usuário inativo".to_string()));
        }

        let token = self.jwt.generate_access_token(&user)?;
        tracing::info!("✅ Login de '{}' ({})", user.id, user.account_type.as_str());
        Ok(LoginResponse::success(token, self.jwt.expires_in(), user))
    }
}
