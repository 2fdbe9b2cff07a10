use super::CategoryCommandService;
use crate::{
    application::{
        authorization::require_admin,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Refused with a conflict while any article still files under the category.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        require_admin(actor)?;

        let id = CategoryId::new(command.id)?;
        if self.category_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }

        let in_use = self.article_repo.count_by_category(id).await?;
        if in_use > 0 {
            return Err(ApplicationError::conflict(format!(
                "category is still used by {in_use} article(s)"
            )));
        }

        self.category_repo.delete(id).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }
}
