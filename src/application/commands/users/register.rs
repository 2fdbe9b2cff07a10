use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Role},
};

pub struct RegisterInitialAdminCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Bootstraps the single administrator account. Refused once an admin exists;
    /// storage enforces the same rule for concurrent callers.
    pub async fn register_initial_admin(
        &self,
        command: RegisterInitialAdminCommand,
    ) -> ApplicationResult<UserDto> {
        if self.user_repo.exists_with_role(Role::Admin).await? {
            return Err(ApplicationError::validation("administrator already exists"));
        }

        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(email, password_hash, Role::Admin, self.clock.now());

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = i64::from(user.id), email = %user.email, "initial administrator registered");
        Ok(user.into())
    }
}
