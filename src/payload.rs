//! JSON bodies sent by the three forms.

use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::FormError;
use crate::form::FormFields;

/// Body of `POST /recipes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipePayload {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub category: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: String,
    pub user_id: u64,
}

impl RecipePayload {
    pub fn from_form(form: &impl FormFields, config: &ClientConfig) -> Self {
        Self {
            title: form.text("title"),
            description: form.text("description"),
            ingredients: form.text("ingredients"),
            instructions: form.text("instructions"),
            category: form.text("category"),
            prep_time: form.count_or("prep_time", 0),
            cook_time: form.count_or("cook_time", 0),
            servings: form.count_or("servings", 1),
            difficulty: form.text("difficulty"),
            user_id: config.user_id,
        }
    }
}

/// Body of `POST /feedback`.
///
/// Unparsable numbers travel as `null`; the rating is not range-checked
/// here, the server owns that rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackPayload {
    pub recipe_id: Option<i64>,
    pub user_id: u64,
    pub comment: String,
    pub rating: Option<i64>,
}

impl FeedbackPayload {
    pub fn from_form(form: &impl FormFields, config: &ClientConfig) -> Self {
        Self {
            recipe_id: form.int("recipe_id"),
            user_id: config.user_id,
            comment: form.text("comment"),
            rating: form.int("rating"),
        }
    }
}

/// Body of `POST /users/register`. The confirmation field never leaves
/// the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl RegistrationPayload {
    /// Build the payload, rejecting a password/confirmation mismatch.
    pub fn from_form(form: &impl FormFields) -> Result<Self, FormError> {
        let password = form.text("password");
        if form.text("confirm_password") != password {
            return Err(FormError::PasswordMismatch);
        }

        Ok(Self {
            username: form.text("username"),
            email: form.text("email"),
            password,
            first_name: form.text("first_name"),
            last_name: form.text("last_name"),
            bio: form.text("bio"),
        })
    }
}
