/// Popup UI for the Job Scout extension

use yew::prelude::*;
use crate::ui::rank::RankPanel;
use crate::ui::search::SearchPanel;
use crate::ui::settings::SettingsPanel;
use crate::ui::track::TrackPanel;
use crate::view_model::{PopupTab, TabSelection};

#[function_component(App)]
pub fn app() -> Html {
    let selection = use_state(TabSelection::new);

    // Tab click handlers
    let on_tab_click = {
        let selection = selection.clone();
        move |tab: PopupTab| {
            let selection = selection.clone();
            Callback::from(move |_: MouseEvent| {
                selection.set(selection.select(tab));
            })
        }
    };

    // Panels stay mounted so switching tabs keeps their results
    let panel = |tab: PopupTab, content: Html| {
        html! {
            <section class={selection.class_for("tab-panel", tab)} hidden={!selection.is_active(tab)}>
                {content}
            </section>
        }
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Job Scout"}</h1>

            // Tab navigation
            <div class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list">
                    {for PopupTab::ALL.into_iter().map(|tab| html! {
                        <li class={if selection.is_active(tab) { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}>
                            <button
                                class="pf-v5-c-tabs__link"
                                onclick={on_tab_click(tab)}
                            >
                                <span class="pf-v5-c-tabs__item-text">{tab.label()}</span>
                            </button>
                        </li>
                    })}
                </ul>
            </div>

            // Tab content
            <div class="tab-pane-content">
                {panel(PopupTab::Search, html! { <SearchPanel /> })}
                {panel(PopupTab::Track, html! { <TrackPanel /> })}
                {panel(PopupTab::Rank, html! { <RankPanel /> })}
                {panel(PopupTab::Settings, html! { <SettingsPanel /> })}
            </div>

            <p class="footer-popup">
                {concat!("Job Scout v", env!("CARGO_PKG_VERSION"))}
            </p>
        </div>
    }
}
