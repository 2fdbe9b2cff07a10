// src/application/authorization.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::Role;

/// Succeeds only when the verified token carries `role`.
pub fn require_role(actor: &AuthenticatedUser, role: Role) -> ApplicationResult<()> {
    if actor.has_role(role) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "{} role required",
            role.as_str()
        )))
    }
}

pub(crate) fn require_admin(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    require_role(actor, Role::Admin)
}
