use async_trait::async_trait;
use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use gatehouse_application::IdentityProvider;
use gatehouse_core::{AppError, AppResult, UserIdentity};

use crate::error::ApiResult;

pub const PRINCIPAL_ID_HEADER: &str = "x-principal-id";
pub const PRINCIPAL_NAME_HEADER: &str = "x-principal-name";
pub const PRINCIPAL_EMAIL_HEADER: &str = "x-principal-email";

/// Resolves the principal asserted by the fronting auth proxy.
pub struct HeaderIdentityProvider<'a> {
    headers: &'a HeaderMap,
}

impl<'a> HeaderIdentityProvider<'a> {
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
    }
}

#[async_trait]
impl IdentityProvider for HeaderIdentityProvider<'_> {
    async fn current_principal(&self) -> AppResult<Option<UserIdentity>> {
        let Some(subject) = self.header(PRINCIPAL_ID_HEADER) else {
            return Ok(None);
        };
        let email = self.header(PRINCIPAL_EMAIL_HEADER);
        let display_name = self
            .header(PRINCIPAL_NAME_HEADER)
            .or_else(|| email.clone())
            .unwrap_or_else(|| subject.clone());

        Ok(Some(UserIdentity::new(subject, display_name, email)))
    }
}

pub async fn require_identity(mut request: Request, next: Next) -> ApiResult<Response> {
    let identity = HeaderIdentityProvider::new(request.headers())
        .current_principal()
        .await?
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
