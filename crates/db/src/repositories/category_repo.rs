//! Repository for categories.

use folio_core::authoring::CreateCategory;
use folio_core::catalog::{Category, DEFAULT_CATEGORY_COLOR};
use folio_core::error::CoreError;

use crate::{next_id, DbPool};

pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories in id order.
    pub async fn list(pool: &DbPool) -> Vec<Category> {
        let tables = pool.tables.read().await;
        let mut categories = tables.categories.clone();
        categories.sort_by_key(|c| c.id);
        categories
    }

    /// Store a new category. Names are unique, ignoring case.
    pub async fn create(pool: &DbPool, input: &CreateCategory) -> Result<Category, CoreError> {
        let mut tables = pool.tables.write().await;
        let name = input.name.trim();
        if tables
            .categories
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
        {
            return Err(CoreError::Conflict(format!("Category {name:?} already exists")));
        }

        let category = Category {
            id: next_id(tables.categories.iter().map(|c| c.id)),
            name: name.to_string(),
            description: input.description.clone().filter(|d| !d.trim().is_empty()),
            color: input
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
        };
        tables.categories.push(category.clone());
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::seeded_pool;

    fn input(name: &str) -> CreateCategory {
        CreateCategory {
            name: name.into(),
            description: None,
            color: None,
        }
    }

    #[tokio::test]
    async fn lists_in_id_order() {
        let pool = seeded_pool();
        pool.tables.write().await.categories.reverse();

        let ids: Vec<_> = CategoryRepo::list(&pool).await.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_default_color() {
        let pool = seeded_pool();
        let created = CategoryRepo::create(&pool, &input(" Embedded ")).await.unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(created.name, "Embedded");
        assert_eq!(created.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(CategoryRepo::list(&pool).await.len(), 5);
    }

    #[tokio::test]
    async fn duplicate_names_conflict() {
        let pool = seeded_pool();
        assert_matches!(
            CategoryRepo::create(&pool, &input("devops")).await,
            Err(CoreError::Conflict(_))
        );
    }
}
