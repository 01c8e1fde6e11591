//! UI components: star rating, search panel and result cards.

use std::rc::Rc;

use gloo::console;
use shei_deli::search::{NO_RESULTS_MESSAGE, search_recipes};
use shei_deli::stars::whole_stars;
use shei_deli::{ClientConfig, RecipeCard, SearchSequence, StarRating};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::dom::{document, navigate};
use crate::http::FetchTransport;

/// Star rating widget.
#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    /// Starting value; fractional averages show whole stars only.
    pub rating: f64,
    #[prop_or(false)]
    pub interactive: bool,
    /// Id of the hidden input that receives the chosen value.
    #[prop_or(AttrValue::Static("rating"))]
    pub input_id: AttrValue,
}

fn write_hidden_input(id: &str, value: u8) {
    let input = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    match input {
        Some(input) => input.set_value(&value.to_string()),
        None => console::log!(format!("no #{id} input for star rating")),
    }
}

#[function_component(StarRatingWidget)]
pub fn star_rating_widget(props: &StarRatingProps) -> Html {
    let state = {
        let rating = props.rating;
        let interactive = props.interactive;
        use_state(move || {
            if interactive {
                StarRating::interactive(whole_stars(rating))
            } else {
                StarRating::display(rating)
            }
        })
    };

    let on_leave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.leave();
            state.set(next);
        })
    };

    let stars = state.stars().map(|star| {
        let style = if state.is_interactive() {
            format!("color: {}; cursor: pointer;", star.color())
        } else {
            format!("color: {};", star.color())
        };

        let (on_click, on_over) = if state.is_interactive() {
            let on_click = {
                let state = state.clone();
                let input_id = props.input_id.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = *state;
                    if let Some(value) = next.click(star.index) {
                        write_hidden_input(&input_id, value);
                        state.set(next);
                    }
                })
            };
            let on_over = {
                let state = state.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = *state;
                    next.hover(star.index);
                    state.set(next);
                })
            };
            (Some(on_click), Some(on_over))
        } else {
            (None, None)
        };

        html! {
            <span
                class="star"
                data-index={star.index.to_string()}
                style={style}
                onclick={on_click}
                onmouseover={on_over}
            >
                { star.glyph() }
            </span>
        }
    });

    html! {
        <span class="star-rating" onmouseleave={state.is_interactive().then_some(on_leave)}>
            { for stars }
        </span>
    }
}

/// One clickable search result.
#[derive(Properties, PartialEq)]
pub struct RecipeCardProps {
    pub card: RecipeCard,
}

#[function_component(RecipeCardView)]
pub fn recipe_card_view(props: &RecipeCardProps) -> Html {
    let card = &props.card;
    let on_click = {
        let route = card.route();
        Callback::from(move |_: MouseEvent| navigate(&route))
    };

    html! {
        <div class="recipe-card" data-recipe-id={card.id.to_string()} onclick={on_click}>
            <div class="recipe-image"></div>
            <div class="recipe-content">
                <h3 class="recipe-title">{ &card.title }</h3>
                <p class="recipe-description">{ &card.description }</p>
                <div class="recipe-meta">
                    <span>{ &card.duration }</span>
                    <div class="rating">
                        <span class="stars">{ &card.stars }</span>
                        <span>{ &card.rating }</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// What the results area currently shows.
#[derive(Clone, PartialEq)]
pub enum Results {
    Idle,
    Empty,
    Found(Vec<RecipeCard>),
}

impl Results {
    pub fn from_cards(cards: Vec<RecipeCard>) -> Self {
        if cards.is_empty() {
            Results::Empty
        } else {
            Results::Found(cards)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchResultsProps {
    pub results: Results,
}

/// The `#searchResults` container.
#[function_component(SearchResultsList)]
pub fn search_results_list(props: &SearchResultsProps) -> Html {
    html! {
        <div id="searchResults" class="search-results">
            {
                match &props.results {
                    Results::Idle => html! {},
                    Results::Empty => html! { <p>{ NO_RESULTS_MESSAGE }</p> },
                    Results::Found(cards) => cards
                        .iter()
                        .map(|card| html! { <RecipeCardView key={card.id.to_string()} card={card.clone()} /> })
                        .collect::<Html>(),
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchPanelProps {
    pub config: Rc<ClientConfig>,
    #[prop_or(AttrValue::Static("Search recipes..."))]
    pub placeholder: AttrValue,
}

/// Search box with live results. Every input of two or more characters
/// sends a request; only the newest reply is rendered, and failures go to
/// the console.
#[function_component(SearchPanel)]
pub fn search_panel(props: &SearchPanelProps) -> Html {
    let results = use_state(|| Results::Idle);
    let sequence = use_mut_ref(SearchSequence::default);

    let on_input = {
        let results = results.clone();
        let config = props.config.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let query = target.value();
            if shei_deli::SearchQuery::new(&query).is_none() {
                return;
            }

            let ticket = sequence.borrow_mut().issue();
            let sequence = sequence.clone();
            let results = results.clone();
            let config = config.clone();
            spawn_local(async move {
                match search_recipes(&config, &FetchTransport, &query).await {
                    Ok(Some(response)) => {
                        if !sequence.borrow().is_current(ticket) {
                            return;
                        }
                        results.set(Results::from_cards(response.cards()));
                    }
                    Ok(None) => {}
                    Err(err) => console::error!(format!("Search error: {err}")),
                }
            });
        })
    };

    html! {
        <div class="search-panel">
            <input
                type="search"
                class="search-input"
                placeholder={props.placeholder.clone()}
                oninput={on_input}
            />
            <SearchResultsList results={(*results).clone()} />
        </div>
    }
}
