use super::CategoryCommandService;
use crate::{
    application::{
        authorization::require_admin,
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::{CategoryTitle, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        require_admin(actor)?;

        let title = CategoryTitle::new(command.name)?;
        let now = self.clock.now();
        let slug = self.slug_for(&title, now)?;

        let created = self
            .category_repo
            .insert(NewCategory {
                title,
                slug,
                description: command.description.unwrap_or_default(),
                image: command.image.unwrap_or_default(),
                created_at: now,
            })
            .await?;

        tracing::info!(category_id = %created.id, slug = created.slug.as_str(), "category created");
        Ok(created.into())
    }
}
