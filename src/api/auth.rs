//! Bearer-token sessions and per-route role guards.
//!
//! [`authenticate`] runs on every request and attaches the caller's
//! [`Principal`] when the token is known. [`require_role`] is layered onto
//! individual routes with the role it demands as its state.

use crate::api::error::AppError;
use crate::config::AuthConfig;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub email: String,
    pub roles: BTreeSet<Role>,
}

impl Principal {
    pub fn user(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            roles: BTreeSet::from([Role::User]),
        }
    }

    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            roles: BTreeSet::from([Role::User, Role::Admin]),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Token → principal lookup table.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, Principal>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every configured user holds USER; ADMIN comes from the user's own flag
    /// or from `admin_emails`.
    pub fn from_config(config: &AuthConfig) -> Self {
        let mut registry = Self::new();
        for user in &config.users {
            let is_admin = user.admin
                || config
                    .admin_emails
                    .iter()
                    .any(|email| email.eq_ignore_ascii_case(&user.email));
            let principal = if is_admin {
                Principal::admin(&user.email)
            } else {
                Principal::user(&user.email)
            };
            registry.register(&user.token, principal);
        }
        registry
    }

    pub fn register(&mut self, token: impl Into<String>, principal: Principal) {
        self.sessions.insert(token.into(), principal);
    }

    pub fn resolve(&self, token: &str) -> Option<&Principal> {
        self.sessions.get(token)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Attaches the caller's [`Principal`] to the request when the bearer token is
/// known. Unknown or missing tokens leave the request anonymous.
pub async fn authenticate(
    State(sessions): State<Arc<SessionRegistry>>,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = bearer_token(request.headers()).and_then(|token| sessions.resolve(token));

    match principal {
        Some(principal) => {
            debug!(email = %principal.email, "Authenticated request");
            request.extensions_mut().insert(principal.clone());
        }
        None if request.headers().contains_key(AUTHORIZATION) => {
            warn!(path = %request.uri().path(), "Unknown bearer token");
        }
        None => {}
    }

    next.run(request).await
}

/// Rejects the request with 403 unless the caller holds `required`.
pub async fn require_role(
    State(required): State<Role>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match request.extensions().get::<Principal>() {
        Some(principal) if principal.has_role(required) => Ok(next.run(request).await),
        Some(principal) => {
            warn!(
                email = %principal.email,
                role = ?required,
                path = %request.uri().path(),
                "Caller lacks required role"
            );
            Err(AppError::Forbidden)
        }
        None => {
            warn!(path = %request.uri().path(), "Anonymous request to protected route");
            Err(AppError::Forbidden)
        }
    }
}
