use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_CATEGORY: &str = "articles_category_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_SINGLE_ADMIN: &str = "users_single_admin_idx";
const CNT_USER_ROLE_CHECK: &str = "users_role_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_ARTICLE_SLUG => DomainError::DuplicateSlug("slug already exists".into()),
        CNT_ARTICLE_CATEGORY => {
            DomainError::Conflict("category is missing or still referenced by articles".into())
        }
        CNT_COMMENT_ARTICLE => DomainError::NotFound("article not found".into()),
        CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
        CNT_USER_SINGLE_ADMIN => DomainError::Validation("administrator already exists".into()),
        CNT_USER_ROLE_CHECK => DomainError::Validation("unknown role".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}
