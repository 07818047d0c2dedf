/// Rank tab: resume upload and ranking of stored jobs

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use crate::actions::{rank_jobs, upload_resume};
use crate::fetch::browser_client;
use crate::present::{ranked_cards, Listing, RankedCard};
use crate::ui::components::{begin, listing_html, ActionButton, NoticeView, RankedCardView};
use crate::view_model::{Action, ActionStates, Notice};

#[function_component(RankPanel)]
pub fn rank_panel() -> Html {
    let states = use_reducer(ActionStates::default);
    let file_input = use_node_ref();
    let ranked = use_state(|| None::<Listing<RankedCard>>);
    let notice = use_state(|| None::<Notice>);

    let on_upload = {
        let dispatcher = states.dispatcher();
        let file_input = file_input.clone();
        let notice = notice.clone();

        Callback::from(move |_| {
            let guard = begin(&dispatcher, Action::UploadResume);
            let selected = file_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let notice = notice.clone();
            notice.set(None);

            spawn_local(async move {
                let _guard = guard;
                match upload_resume(&browser_client(), selected).await {
                    Ok(stored) => {
                        let name = stored.filename.unwrap_or_else(|| "resume".to_string());
                        notice.set(Some(Notice::Success(format!("Uploaded {}", name))));
                    }
                    Err(e) => {
                        log::warn!("Resume upload failed: {}", e);
                        notice.set(Some(Notice::error(&e)));
                    }
                }
            });
        })
    };

    let on_rank = {
        let dispatcher = states.dispatcher();
        let ranked = ranked.clone();
        let notice = notice.clone();

        Callback::from(move |_| {
            let guard = begin(&dispatcher, Action::Rank);
            let ranked = ranked.clone();
            let notice = notice.clone();
            notice.set(None);

            spawn_local(async move {
                let _guard = guard;
                match rank_jobs(&browser_client()).await {
                    Ok(jobs) => ranked.set(Some(ranked_cards(&jobs))),
                    Err(e) => {
                        log::warn!("Ranking failed: {}", e);
                        ranked.set(None);
                        notice.set(Some(Notice::error(&e)));
                    }
                }
            });
        })
    };

    html! {
        <div class="flex-column-gap">
            <label class="field-label" for="resume">{"Resume (PDF or text)"}</label>
            <input id="resume" type="file" accept=".pdf,.txt" ref={file_input} />
            <ActionButton action={Action::UploadResume} states={states.clone()} onclick={on_upload} />
            <ActionButton action={Action::Rank} states={states.clone()} onclick={on_rank} />
            <NoticeView notice={(*notice).clone()} />
            if let Some(listing) = &*ranked {
                {listing_html(listing, |card| html! { <RankedCardView card={card.clone()} /> })}
            }
        </div>
    }
}
