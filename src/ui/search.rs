/// Search tab: match the current page against wanted job titles

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use crate::actions::search_jobs;
use crate::fetch::browser_client;
use crate::page::ChromeTabs;
use crate::present::{match_cards, JobCard, Listing};
use crate::ui::components::{begin, listing_html, ActionButton, JobCardView, NoticeView};
use crate::view_model::{Action, ActionStates, Notice};

#[function_component(SearchPanel)]
pub fn search_panel() -> Html {
    let states = use_reducer(ActionStates::default);
    let titles = use_state(String::new);
    let results = use_state(|| None::<Listing<JobCard>>);
    let notice = use_state(|| None::<Notice>);

    let on_titles_input = {
        let titles = titles.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                titles.set(input.value());
            }
        })
    };

    let on_search = {
        let dispatcher = states.dispatcher();
        let titles = titles.clone();
        let results = results.clone();
        let notice = notice.clone();

        Callback::from(move |_| {
            let guard = begin(&dispatcher, Action::Search);
            let raw_titles = (*titles).clone();
            let results = results.clone();
            let notice = notice.clone();
            notice.set(None);

            spawn_local(async move {
                let _guard = guard;
                match search_jobs(&browser_client(), &ChromeTabs, &raw_titles).await {
                    Ok(matches) => {
                        results.set(Some(match_cards(&matches)));
                    }
                    Err(e) => {
                        log::warn!("Search failed: {}", e);
                        results.set(None);
                        notice.set(Some(Notice::error(&e)));
                    }
                }
            });
        })
    };

    html! {
        <div class="flex-column-gap">
            <label class="field-label" for="titles">{"Job titles (one per line)"}</label>
            <textarea
                id="titles"
                class="titles-input"
                rows="4"
                placeholder="Software Engineer\nML Engineer"
                value={(*titles).clone()}
                oninput={on_titles_input}
            />
            <ActionButton action={Action::Search} states={states.clone()} onclick={on_search} />
            <NoticeView notice={(*notice).clone()} />
            if let Some(listing) = &*results {
                {listing_html(listing, |card| html! { <JobCardView card={card.clone()} /> })}
            }
        </div>
    }
}
