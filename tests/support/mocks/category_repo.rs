// tests/support/mocks/category_repo.rs
use async_trait::async_trait;
use aventures_core::domain::category::{
    Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory,
};
use aventures_core::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryCategoryRepo {
    rows: Mutex<Vec<Category>>,
    next_id: Mutex<i64>,
}

impl InMemoryCategoryRepo {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let row = Category {
            id: CategoryId::new(*next_id)?,
            title: category.title,
            slug: category.slug,
            description: category.description,
            image: category.image,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some((title, slug)) = update.title {
            row.title = title;
            row.slug = slug;
        }
        if let Some(description) = update.description {
            row.description = description;
        }
        if let Some(image) = update.image {
            row.image = image;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|c| ids.contains(&c.id)).cloned().collect())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}
