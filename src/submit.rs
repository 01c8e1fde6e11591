//! Form submission control flow.
//!
//! Every form follows the same shape: build the payload, show a loading
//! banner, POST it, then either celebrate and schedule a redirect or show
//! the server's complaint. The loading banner comes down once the outcome
//! has been shown, no matter how the request ends.
//!
//! The browser side plugs in through two seams: [`Transport`] moves bytes,
//! [`Page`] shows things to the user.

use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{SubmitError, TransportError};
use crate::form::FormFields;
use crate::notice::Notice;
use crate::payload::{FeedbackPayload, RecipePayload, RegistrationPayload};
use crate::route::Route;

/// Pause between a success banner and the follow-up navigation.
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues JSON requests. A completed exchange is `Ok` whatever its status;
/// `Err` means no response arrived.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError>;

    async fn get(&self, url: &str) -> Result<HttpReply, TransportError>;
}

/// The user-visible side of a submission.
pub trait Page {
    fn show_loading(&self, message: &str);
    fn hide_loading(&self);
    fn notify(&self, notice: Notice);
    fn redirect_after(&self, route: Route, delay_ms: u32);
    fn reset_form(&self);
}

/// Shows the loading banner while alive.
pub struct LoadingGuard<'a, P: Page + ?Sized> {
    page: &'a P,
}

impl<'a, P: Page + ?Sized> LoadingGuard<'a, P> {
    pub fn new(page: &'a P, message: &str) -> Self {
        page.show_loading(message);
        Self { page }
    }
}

impl<P: Page + ?Sized> Drop for LoadingGuard<'_, P> {
    fn drop(&mut self) {
        self.page.hide_loading();
    }
}

/// The three write endpoints and the copy that goes with each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Recipes,
    Feedback,
    Register,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Recipes => "recipes",
            Endpoint::Feedback => "feedback",
            Endpoint::Register => "users/register",
        }
    }

    pub fn loading_message(self) -> &'static str {
        match self {
            Endpoint::Recipes => "Saving recipe...",
            Endpoint::Feedback => "Submitting feedback...",
            Endpoint::Register => "Creating account...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Endpoint::Recipes => "Recipe saved successfully!",
            Endpoint::Feedback => "Feedback submitted successfully!",
            Endpoint::Register => "Account created successfully!",
        }
    }

    /// Shown when the server rejects a request without saying why.
    pub fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Recipes => "Failed to save recipe",
            Endpoint::Feedback => "Failed to submit feedback",
            Endpoint::Register => "Failed to create account",
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
struct CreatedBody {
    #[serde(rename = "ID", alias = "id")]
    id: Option<u64>,
}

/// Text to show for a rejected request: the body's `error` field when it
/// is a non-empty string, `fallback` for anything else (including bodies
/// that are not JSON at all).
pub fn rejection_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

async fn post<T, B>(
    config: &ClientConfig,
    transport: &T,
    endpoint: Endpoint,
    payload: &B,
) -> Result<String, SubmitError>
where
    T: Transport + ?Sized,
    B: Serialize,
{
    let body = serde_json::to_string(payload).map_err(|_| SubmitError::Encode)?;
    let reply = transport.post_json(&config.url(endpoint.path()), body).await?;

    if reply.is_success() {
        Ok(reply.body)
    } else {
        Err(SubmitError::Rejected(rejection_message(
            &reply.body,
            endpoint.failure_message(),
        )))
    }
}

fn fail<P: Page + ?Sized>(page: &P, err: SubmitError) -> SubmitError {
    page.notify(Notice::error(err.to_string()));
    err
}

/// Create a recipe, then go to its detail page.
///
/// A success body without an identifier sends the user home instead.
pub async fn submit_recipe<T, P>(
    config: &ClientConfig,
    form: &impl FormFields,
    transport: &T,
    page: &P,
) -> Result<Route, SubmitError>
where
    T: Transport + ?Sized,
    P: Page + ?Sized,
{
    let payload = RecipePayload::from_form(form, config);
    let _loading = LoadingGuard::new(page, Endpoint::Recipes.loading_message());

    match post(config, transport, Endpoint::Recipes, &payload).await {
        Ok(body) => {
            page.notify(Notice::success(Endpoint::Recipes.success_message()));
            let route = serde_json::from_str::<CreatedBody>(&body)
                .ok()
                .and_then(|created| created.id)
                .map_or(Route::Home, Route::recipe);
            page.redirect_after(route.clone(), REDIRECT_DELAY_MS);
            Ok(route)
        }
        Err(err) => Err(fail(page, err)),
    }
}

/// Post feedback, clear the form, then reload the page.
pub async fn submit_feedback<T, P>(
    config: &ClientConfig,
    form: &impl FormFields,
    transport: &T,
    page: &P,
) -> Result<Route, SubmitError>
where
    T: Transport + ?Sized,
    P: Page + ?Sized,
{
    let payload = FeedbackPayload::from_form(form, config);
    let _loading = LoadingGuard::new(page, Endpoint::Feedback.loading_message());

    match post(config, transport, Endpoint::Feedback, &payload).await {
        Ok(_) => {
            page.notify(Notice::success(Endpoint::Feedback.success_message()));
            page.reset_form();
            page.redirect_after(Route::Reload, REDIRECT_DELAY_MS);
            Ok(Route::Reload)
        }
        Err(err) => Err(fail(page, err)),
    }
}

/// Register a user, then go to the site root.
///
/// A password mismatch is reported without touching the network.
pub async fn submit_registration<T, P>(
    config: &ClientConfig,
    form: &impl FormFields,
    transport: &T,
    page: &P,
) -> Result<Route, SubmitError>
where
    T: Transport + ?Sized,
    P: Page + ?Sized,
{
    let payload = match RegistrationPayload::from_form(form) {
        Ok(payload) => payload,
        Err(err) => return Err(fail(page, err.into())),
    };

    let _loading = LoadingGuard::new(page, Endpoint::Register.loading_message());

    match post(config, transport, Endpoint::Register, &payload).await {
        Ok(_) => {
            page.notify(Notice::success(Endpoint::Register.success_message()));
            page.redirect_after(Route::Home, REDIRECT_DELAY_MS);
            Ok(Route::Home)
        }
        Err(err) => Err(fail(page, err)),
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::RefCell;

    use super::*;

    /// Replays one scripted reply and records every request.
    pub struct ScriptedTransport {
        reply: Result<HttpReply, TransportError>,
        pub requests: RefCell<Vec<(String, String, Option<String>)>>,
    }

    impl ScriptedTransport {
        pub fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply::new(status, body)),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn offline() -> Self {
            Self {
                reply: Err(TransportError("Failed to fetch".to_string())),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for ScriptedTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError> {
            self.requests
                .borrow_mut()
                .push(("POST".to_string(), url.to_string(), Some(body)));
            self.reply.clone()
        }

        async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
            self.requests
                .borrow_mut()
                .push(("GET".to_string(), url.to_string(), None));
            self.reply.clone()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PageEvent {
        Loading(String),
        LoadingHidden,
        Notice(Notice),
        Redirect(Route, u32),
        FormReset,
    }

    #[derive(Default)]
    pub struct RecordingPage {
        pub events: RefCell<Vec<PageEvent>>,
    }

    impl RecordingPage {
        pub fn events(&self) -> Vec<PageEvent> {
            self.events.borrow().clone()
        }

        pub fn notices(&self) -> Vec<Notice> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    PageEvent::Notice(n) => Some(n),
                    _ => None,
                })
                .collect()
        }

        pub fn redirects(&self) -> Vec<(Route, u32)> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    PageEvent::Redirect(r, d) => Some((r, d)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Page for RecordingPage {
        fn show_loading(&self, message: &str) {
            self.events
                .borrow_mut()
                .push(PageEvent::Loading(message.to_string()));
        }

        fn hide_loading(&self) {
            self.events.borrow_mut().push(PageEvent::LoadingHidden);
        }

        fn notify(&self, notice: Notice) {
            self.events.borrow_mut().push(PageEvent::Notice(notice));
        }

        fn redirect_after(&self, route: Route, delay_ms: u32) {
            self.events
                .borrow_mut()
                .push(PageEvent::Redirect(route, delay_ms));
        }

        fn reset_form(&self) {
            self.events.borrow_mut().push(PageEvent::FormReset);
        }
    }
}
