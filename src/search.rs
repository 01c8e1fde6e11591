//! Recipe search: query gating, request URL, and result cards.

use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::route::Route;
use crate::stars::{FILLED_GLYPH, whole_stars};
use crate::submit::Transport;

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

/// Shown in place of cards when a search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No recipes found.";

/// A query long enough to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: &str) -> Option<Self> {
        (query.chars().count() >= MIN_QUERY_CHARS).then(|| Self(query.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `GET` URL for this query, e.g. `/api/v1/recipes?search=tofu+curry`.
    pub fn url(&self, config: &ClientConfig) -> Result<String, serde_urlencoded::ser::Error> {
        let query = serde_urlencoded::to_string([("search", self.0.as_str())])?;
        Ok(format!("{}?{}", config.url("recipes"), query))
    }
}

/// One recipe in a search response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "ID", alias = "id")]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: i64,
    #[serde(default)]
    pub cook_time: i64,
    #[serde(default)]
    pub average_rating: f64,
}

/// Body of `GET /recipes?search=...`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl SearchResponse {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn cards(&self) -> Vec<RecipeCard> {
        self.recipes.iter().map(RecipeCard::from).collect()
    }
}

/// Display fields of a clickable result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// e.g. `"45 min"`
    pub duration: String,
    /// One filled glyph per whole star of the average.
    pub stars: String,
    /// Average to one decimal place.
    pub rating: String,
}

impl RecipeCard {
    pub fn route(&self) -> Route {
        Route::recipe(self.id)
    }
}

impl From<&RecipeSummary> for RecipeCard {
    fn from(summary: &RecipeSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title.clone(),
            description: summary.description.clone(),
            duration: format!(
                "{} min",
                summary.prep_time.saturating_add(summary.cook_time)
            ),
            stars: FILLED_GLYPH.repeat(usize::from(whole_stars(summary.average_rating))),
            rating: format!("{:.1}", summary.average_rating),
        }
    }
}

/// Run a search for `raw`.
///
/// Returns `Ok(None)` without any request when the query is too short.
pub async fn search_recipes<T: Transport + ?Sized>(
    config: &ClientConfig,
    transport: &T,
    raw: &str,
) -> Result<Option<SearchResponse>, SearchError> {
    let Some(query) = SearchQuery::new(raw) else {
        return Ok(None);
    };

    let reply = transport.get(&query.url(config)?).await?;
    if !reply.is_success() {
        return Err(SearchError::Status(reply.status));
    }
    Ok(Some(SearchResponse::parse(&reply.body)?))
}

/// Tracks the most recently issued search so slower, older replies can
/// be dropped.
#[derive(Debug, Default)]
pub struct SearchSequence {
    latest: u64,
}

impl SearchSequence {
    /// Ticket for a newly issued search.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
