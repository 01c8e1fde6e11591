//! # shei-deli
//!
//! The browser interaction layer of the Shei-deli recipe site, minus the
//! browser. Everything here is plain Rust so it can be tested natively;
//! the `wasm-ui` crate binds it to the DOM.
//!
//! ## Overview
//!
//! - **Forms**: read named fields, coerce numbers, validate passwords
//! - **Submission**: POST a JSON payload, map the reply to a page outcome
//! - **Notices**: loading, success and error banners
//! - **Stars**: the 1-5 star rating widget state
//! - **Search**: query gating, request URL, result cards
//!
//! ## Example
//!
//! ```
//! use shei_deli::{ClientConfig, FieldMap, RecipePayload};
//!
//! let form = FieldMap::from_pairs([
//!     ("title", "Lentil Soup"),
//!     ("prep_time", "15"),
//!     ("cook_time", "abc"),
//! ]);
//!
//! let payload = RecipePayload::from_form(&form, &ClientConfig::default());
//! assert_eq!(payload.prep_time, 15);
//! assert_eq!(payload.cook_time, 0);
//! assert_eq!(payload.servings, 1);
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod form;
pub mod notice;
pub mod payload;
pub mod route;
pub mod search;
pub mod stars;
pub mod submit;

pub use category::Category;
pub use config::ClientConfig;
pub use error::{FormError, SearchError, SubmitError, TransportError};
pub use form::{FieldMap, FormFields, parse_leading_int};
pub use notice::{NOTICE_DISMISS_MS, Notice, NoticeKind};
pub use payload::{FeedbackPayload, RecipePayload, RegistrationPayload};
pub use route::Route;
pub use search::{
    RecipeCard, RecipeSummary, SearchQuery, SearchResponse, SearchSequence, search_recipes,
};
pub use stars::{STAR_COUNT, Star, StarRating};
pub use submit::{
    Endpoint, HttpReply, LoadingGuard, Page, REDIRECT_DELAY_MS, Transport, submit_feedback,
    submit_recipe, submit_registration,
};
