//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the requirement, delegating the role check to
//! [`roomdesk_core::roles::require_role`] so the policy lives in one
//! place.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use roomdesk_core::roles::{require_role, Role};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the admin role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be the admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_role(user.role, &[Role::Admin])?;
        Ok(RequireAdmin(user))
    }
}

/// Requires the staff role. Rejects with 403 Forbidden otherwise.
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_role(user.role, &[Role::Staff])?;
        Ok(RequireStaff(user))
    }
}

/// Requires admin or staff. Rejects with 403 Forbidden otherwise.
pub struct RequireAdminOrStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdminOrStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_role(user.role, &[Role::Admin, Role::Staff])?;
        Ok(RequireAdminOrStaff(user))
    }
}
