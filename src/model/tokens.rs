// Color token records grouped by category

use serde::{Deserialize, Serialize};

/// Name of the category backing the configuration panel palette
pub const PALETTE_CATEGORY: &str = "Palette";

/// A named color; the value is stored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    pub name: String,
    pub value: String,
}

impl ColorToken {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A family of color tokens; names are unique within a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCategory {
    pub category: String,
    pub colors: Vec<ColorToken>,
}

impl ColorCategory {
    pub fn new(category: impl Into<String>, colors: Vec<ColorToken>) -> Self {
        Self {
            category: category.into(),
            colors,
        }
    }

    pub fn find(&self, name: &str) -> Option<&ColorToken> {
        self.colors.iter().find(|c| c.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ColorToken> {
        self.colors.iter_mut().find(|c| c.name == name)
    }
}

fn category(name: &str, colors: &[(&str, &str)]) -> ColorCategory {
    ColorCategory::new(
        name,
        colors
            .iter()
            .map(|(n, v)| ColorToken::new(*n, *v))
            .collect(),
    )
}

/// Initial token categories: the editable palette followed by the reference families
pub fn default_categories() -> Vec<ColorCategory> {
    vec![
        category(
            PALETTE_CATEGORY,
            &[
                ("primary", "#0f172a"),
                ("secondary", "#6366f1"),
                ("accent", "#22c55e"),
                ("background", "#ffffff"),
                ("foreground", "#0f172a"),
                ("muted", "#f1f5f9"),
                ("destructive", "#ef4444"),
            ],
        ),
        category(
            "Brand Primary",
            &[
                ("color-brand-primary-lightest", "#FFE3E3"),
                ("color-brand-primary-light", "#FC867F"),
                ("color-brand-primary-medium", "#DA291C"),
                ("color-brand-primary-dark", "#B41E13"),
                ("color-brand-primary-darkest", "#83170F"),
            ],
        ),
        category(
            "Neutral",
            &[
                ("color-neutral-lightest", "#FFFFFF"),
                ("color-neutral-light", "#F8F8F8"),
                ("color-neutral-medium", "#DBDBDB"),
                ("color-neutral-dark", "#525252"),
                ("color-neutral-darkest", "#1F1D1D"),
            ],
        ),
        category(
            "Support Highlights",
            &[
                ("color-support-highlight-lightest", "#FFFAAD"),
                ("color-support-highlight-light", "#FFE458"),
                ("color-support-highlight-medium", "#FFC722"),
                ("color-support-highlight-dark", "#FB9C2D"),
                ("color-support-highlight-darkest", "#B84D01"),
            ],
        ),
        category(
            "Support Success",
            &[
                ("color-support-success-light", "#DDF9ED"),
                ("color-support-success-dark", "#006B4F"),
            ],
        ),
        category(
            "Support Danger",
            &[
                ("color-support-danger-light", "#FFFAAD"),
                ("color-support-danger-dark", "#B84D01"),
            ],
        ),
        category("Accessibility", &[("color-accessibility", "#FFF333")]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_within_each_category() {
        for cat in default_categories() {
            let names: HashSet<&str> = cat.colors.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names.len(), cat.colors.len(), "category={}", cat.category);
        }
    }

    #[test]
    fn palette_comes_first() {
        let cats = default_categories();
        assert_eq!(cats[0].category, PALETTE_CATEGORY);
        assert_eq!(cats[0].colors.len(), 7);
        assert_eq!(cats[0].find("destructive").map(|c| c.value.as_str()), Some("#ef4444"));
    }
}
