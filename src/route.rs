//! Full-page navigation targets.

use std::fmt;

use crate::category::Category;

/// Where the browser goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Site root.
    Home,
    /// `/category/{key}`
    Category(String),
    /// `/recipe/{id}`
    Recipe(String),
    /// Reload the current page in place.
    Reload,
}

impl Route {
    pub fn recipe(id: impl fmt::Display) -> Self {
        Route::Recipe(id.to_string())
    }

    /// Route for a category card's `data-category` value. Absent or empty
    /// values produce no route.
    pub fn from_category_attr(value: Option<String>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(Route::Category)
    }

    /// Route for a recipe card's `data-recipe-id` value.
    pub fn from_recipe_attr(value: Option<String>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(Route::Recipe)
    }

    /// The known category this route points at, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            Route::Category(key) => Category::from_key(key),
            _ => None,
        }
    }

    /// Path to assign to `location.href`; `None` for an in-place reload.
    pub fn path(&self) -> Option<String> {
        match self {
            Route::Home => Some("/".to_string()),
            Route::Category(key) => Some(format!("/category/{key}")),
            Route::Recipe(id) => Some(format!("/recipe/{id}")),
            Route::Reload => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => f.write_str(&path),
            None => f.write_str("(reload)"),
        }
    }
}
