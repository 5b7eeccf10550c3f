// Categorized color tokens, independent of the theme collection

use crate::error::TokenError;
use crate::model::{default_categories, ColorCategory, ColorToken, PALETTE_CATEGORY};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenStore {
    categories: Vec<ColorCategory>,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new(default_categories())
    }
}

impl TokenStore {
    pub fn new(categories: Vec<ColorCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[ColorCategory] {
        &self.categories
    }

    pub fn category(&self, category: &str) -> Option<&ColorCategory> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn color_value(&self, category: &str, name: &str) -> Option<&str> {
        self.category(category)
            .and_then(|c| c.find(name))
            .map(|t| t.value.as_str())
    }

    // Exact-match lookup of category then token; misses leave every token untouched
    pub fn update_color_value(
        &mut self,
        category: &str,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), TokenError> {
        let cat = self
            .categories
            .iter_mut()
            .find(|c| c.category == category)
            .ok_or_else(|| TokenError::CategoryNotFound(category.to_string()))?;
        let token = cat.find_mut(name).ok_or_else(|| TokenError::TokenNotFound {
            category: category.to_string(),
            name: name.to_string(),
        })?;
        token.value = value.into();
        debug!(category, name, value = %token.value, "Color token updated");
        Ok(())
    }

    /// Flat view of the palette category used by the configuration panel
    pub fn palette(&self) -> &[ColorToken] {
        self.category(PALETTE_CATEGORY)
            .map(|c| c.colors.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_palette_color(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), TokenError> {
        let name = self
            .palette()
            .get(index)
            .map(|t| t.name.clone())
            .ok_or_else(|| TokenError::TokenNotFound {
                category: PALETTE_CATEGORY.to_string(),
                name: format!("#{}", index),
            })?;
        self.update_color_value(PALETTE_CATEGORY, &name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_changes_only_the_target_token() {
        let mut store = TokenStore::default();
        let before = store.clone();
        store
            .update_color_value("Neutral", "color-neutral-dark", "#000000")
            .unwrap();

        for (old, new) in before.categories().iter().zip(store.categories()) {
            assert_eq!(old.category, new.category);
            for (a, b) in old.colors.iter().zip(&new.colors) {
                if new.category == "Neutral" && b.name == "color-neutral-dark" {
                    assert_eq!(b.value, "#000000");
                } else {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn misses_report_and_mutate_nothing() {
        let mut store = TokenStore::default();
        let before = store.clone();
        assert_eq!(
            store.update_color_value("Nope", "primary", "#fff"),
            Err(TokenError::CategoryNotFound("Nope".into()))
        );
        assert!(matches!(
            store.update_color_value("Neutral", "primary", "#fff"),
            Err(TokenError::TokenNotFound { .. })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn category_match_is_exact() {
        let mut store = TokenStore::default();
        assert!(store
            .update_color_value("neutral", "color-neutral-dark", "#000")
            .is_err());
    }

    #[test]
    fn palette_adapter_writes_through() {
        let mut store = TokenStore::default();
        store.set_palette_color(0, "#ff0000").unwrap();
        assert_eq!(store.palette()[0].value, "#ff0000");
        assert_eq!(store.color_value(PALETTE_CATEGORY, "primary"), Some("#ff0000"));
        assert!(store.set_palette_color(99, "#fff").is_err());
    }
}
