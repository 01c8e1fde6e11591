//! Status banners and navigation on the live document.

use gloo::console;
use gloo::timers::callback::Timeout;
use shei_deli::notice::{DEFAULT_LOADING_MESSAGE, LOADING_BANNER_ID};
use shei_deli::{Notice, NoticeKind, Page, Route};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlFormElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn log_failure(what: &str, err: JsValue) {
    console::error!(format!("{what} failed:"), err);
}

/// Put the loading banner at the top of `.container`.
///
/// An empty message falls back to "Loading...".
pub fn show_loading(message: &str) {
    let message = if message.is_empty() {
        DEFAULT_LOADING_MESSAGE
    } else {
        message
    };
    if let Err(err) = try_show_loading(message) {
        log_failure("showing loading banner", err);
    }
}

fn try_show_loading(message: &str) -> Result<(), JsValue> {
    let Some(document) = document() else {
        return Ok(());
    };
    let Some(container) = document.query_selector(".container")? else {
        console::log!("no .container on this page; loading banner skipped");
        return Ok(());
    };

    let banner = document.create_element("div")?;
    banner.set_id(LOADING_BANNER_ID);
    banner.set_class_name(NoticeKind::Info.class());

    let spinner = document.create_element("div")?;
    spinner.set_class_name("loading");
    banner.append_child(&spinner)?;
    banner.append_child(&document.create_text_node(&format!(" {message}")))?;

    container.insert_before(&banner, container.first_child().as_ref())?;
    Ok(())
}

/// Remove the loading banner if one is showing.
pub fn hide_loading() {
    if let Some(banner) = document().and_then(|d| d.get_element_by_id(LOADING_BANNER_ID)) {
        banner.remove();
    }
}

pub fn show_success(message: &str) {
    show_notice(&Notice::success(message));
}

pub fn show_error(message: &str) {
    show_notice(&Notice::error(message));
}

/// Float a banner in the top-right corner and drop it after the dismiss
/// delay. Banners are independent of one another.
pub fn show_notice(notice: &Notice) {
    match build_banner(notice) {
        Ok(Some(banner)) => {
            Timeout::new(notice.dismiss_after_ms(), move || banner.remove()).forget();
        }
        Ok(None) => {}
        Err(err) => log_failure("showing notice", err),
    }
}

fn build_banner(notice: &Notice) -> Result<Option<Element>, JsValue> {
    let Some(document) = document() else {
        return Ok(None);
    };
    let Some(body) = document.body() else {
        return Ok(None);
    };

    let banner = document.create_element("div")?;
    banner.set_class_name(notice.kind.class());
    banner.set_text_content(Some(&notice.message));
    banner.set_attribute("style", &notice.kind.floating_style())?;
    body.append_child(&banner)?;
    Ok(Some(banner))
}

/// Navigate the whole page, bypassing any client-side routing.
pub fn navigate(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let result = match route.path() {
        Some(path) => location.set_href(&path),
        None => location.reload(),
    };
    if let Err(err) = result {
        log_failure(&format!("navigating to {route}"), err);
    }
}

/// [`Page`] backed by the real document, optionally tied to the form that
/// triggered the submission.
pub struct DomPage {
    form: Option<HtmlFormElement>,
}

impl DomPage {
    pub fn new() -> Self {
        Self { form: None }
    }

    pub fn for_form(form: HtmlFormElement) -> Self {
        Self { form: Some(form) }
    }
}

impl Default for DomPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for DomPage {
    fn show_loading(&self, message: &str) {
        show_loading(message);
    }

    fn hide_loading(&self) {
        hide_loading();
    }

    fn notify(&self, notice: Notice) {
        show_notice(&notice);
    }

    fn redirect_after(&self, route: Route, delay_ms: u32) {
        Timeout::new(delay_ms, move || navigate(&route)).forget();
    }

    fn reset_form(&self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }
}
