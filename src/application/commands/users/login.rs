use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

const INVALID_CREDENTIALS: &str = "invalid email or password";

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::validation(INVALID_CREDENTIALS))?;
        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;

        let token = self.token_manager.issue(TokenSubject::from(&user)).await?;
        tracing::debug!(user_id = i64::from(user.id), "login succeeded");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    /// Unknown email and wrong password produce the same error.
    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::validation(INVALID_CREDENTIALS))?;

        match self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            Ok(()) => Ok(user),
            Err(ApplicationError::Unauthorized(_)) => {
                Err(ApplicationError::validation(INVALID_CREDENTIALS))
            }
            Err(other) => Err(other),
        }
    }
}
