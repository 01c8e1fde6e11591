//! Submit handlers for the recipe, feedback and registration forms.

use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use shei_deli::{
    ClientConfig, FormFields, Route, SubmitError, submit_feedback, submit_recipe,
    submit_registration,
};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};
use yew::platform::spawn_local;

use crate::dom::{DomPage, document};
use crate::http::FetchTransport;

/// Field values captured from a form at submit time.
pub struct FormDataFields(FormData);

impl FormDataFields {
    pub fn read(form: &HtmlFormElement) -> Option<Self> {
        FormData::new_with_form(form).ok().map(Self)
    }
}

impl FormFields for FormDataFields {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).as_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    Recipe,
    Feedback,
    Register,
}

impl FormKind {
    const ALL: [FormKind; 3] = [FormKind::Recipe, FormKind::Feedback, FormKind::Register];

    fn element_id(self) -> &'static str {
        match self {
            FormKind::Recipe => "recipeForm",
            FormKind::Feedback => "feedbackForm",
            FormKind::Register => "registerForm",
        }
    }
}

/// Attach submit handlers to whichever of the three forms the page has.
pub fn bind_forms(config: Rc<ClientConfig>) {
    let Some(document) = document() else {
        return;
    };

    for kind in FormKind::ALL {
        let Some(form) = document
            .get_element_by_id(kind.element_id())
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            continue;
        };

        let config = config.clone();
        let target = form.clone();
        EventListener::new_with_options(
            &target,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let form = form.clone();
                let config = config.clone();
                spawn_local(async move {
                    handle_submit(kind, form, &config).await;
                });
            },
        )
        .forget();
    }
}

async fn handle_submit(kind: FormKind, form: HtmlFormElement, config: &ClientConfig) {
    let Some(fields) = FormDataFields::read(&form) else {
        console::error!(format!("could not read #{}", kind.element_id()));
        return;
    };
    let page = DomPage::for_form(form);
    let transport = FetchTransport;
    let started = js_sys::Date::now();

    let result: Result<Route, SubmitError> = match kind {
        FormKind::Recipe => submit_recipe(config, &fields, &transport, &page).await,
        FormKind::Feedback => submit_feedback(config, &fields, &transport, &page).await,
        FormKind::Register => submit_registration(config, &fields, &transport, &page).await,
    };

    let elapsed = js_sys::Date::now() - started;
    match result {
        Ok(route) => console::log!(format!(
            "#{} submitted in {elapsed:.0} ms, next: {route}",
            kind.element_id()
        )),
        Err(err) => console::log!(format!(
            "#{} not submitted after {elapsed:.0} ms: {err:?}",
            kind.element_id()
        )),
    }
}
