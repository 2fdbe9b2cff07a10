use super::CategoryCommandService;
use crate::{
    application::{
        authorization::require_admin,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryTitle, CategoryUpdate},
};

#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        require_admin(actor)?;

        let id = CategoryId::new(command.id)?;
        let existing = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let now = self.clock.now();
        let mut update = CategoryUpdate::new(id, now);

        if let Some(name) = command.name {
            let title = CategoryTitle::new(name)?;
            if title != existing.title {
                let slug = self.slug_for(&title, now)?;
                update = update.with_title(title, slug);
            }
        }
        if let Some(description) = command.description {
            update = update.with_description(description);
        }
        if let Some(image) = command.image {
            update = update.with_image(image);
        }

        let updated = self.category_repo.update(update).await?;
        Ok(updated.into())
    }
}
