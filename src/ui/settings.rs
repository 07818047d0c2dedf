/// Settings tab: which LLM the backend uses

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::actions::{load_settings, save_settings};
use crate::fetch::browser_client;
use crate::models::LlmProvider;
use crate::ui::components::{begin, ActionButton, NoticeView};
use crate::view_model::{Action, ActionStates, Notice, SettingsForm};

#[function_component(SettingsPanel)]
pub fn settings_panel() -> Html {
    let states = use_reducer(ActionStates::default);
    let form = use_state(SettingsForm::default);
    let notice = use_state(|| None::<Notice>);

    // Pre-fill from the backend on mount
    {
        let form = form.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_settings(&browser_client()).await {
                    Ok(current) => form.set(SettingsForm::from_settings(&current)),
                    Err(e) => {
                        log::warn!("Failed to load settings: {}", e);
                        notice.set(Some(Notice::Info(format!("Current settings unavailable: {}", e))));
                    }
                }
            });
            || ()
        });
    }

    let on_provider_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(provider) = select.value().parse::<LlmProvider>() {
                    form.set(SettingsForm {
                        provider,
                        ..(*form).clone()
                    });
                }
            }
        })
    };

    let on_key_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                form.set(SettingsForm {
                    api_key: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_model_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                form.set(SettingsForm {
                    ollama_model: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_save = {
        let dispatcher = states.dispatcher();
        let form = form.clone();
        let notice = notice.clone();

        Callback::from(move |_| {
            let guard = begin(&dispatcher, Action::SaveSettings);
            let update = form.to_update();
            let notice = notice.clone();
            notice.set(None);

            spawn_local(async move {
                let _guard = guard;
                match save_settings(&browser_client(), &update).await {
                    Ok(saved) => {
                        notice.set(Some(Notice::Success(format!("Using {}", saved.provider().label()))));
                    }
                    Err(e) => {
                        log::warn!("Saving settings failed: {}", e);
                        notice.set(Some(Notice::error(&e)));
                    }
                }
            });
        })
    };

    html! {
        <div class="flex-column-gap">
            <label class="field-label" for="provider">{"LLM provider"}</label>
            <select id="provider" onchange={on_provider_change}>
                {for LlmProvider::ALL.iter().map(|provider| html! {
                    <option value={provider.as_str()} selected={form.provider == *provider}>
                        {provider.label()}
                    </option>
                })}
            </select>

            if form.shows_api_key() {
                <label class="field-label" for="api-key">{"API key"}</label>
                <input
                    id="api-key"
                    type="password"
                    placeholder="Leave blank to keep the current key"
                    value={form.api_key.clone()}
                    oninput={on_key_input}
                />
            }

            if form.shows_model() {
                <label class="field-label" for="ollama-model">{"Ollama model"}</label>
                <input
                    id="ollama-model"
                    type="text"
                    placeholder="llama3"
                    value={form.ollama_model.clone()}
                    oninput={on_model_input}
                />
            }

            <ActionButton action={Action::SaveSettings} states={states.clone()} onclick={on_save} />
            <NoticeView notice={(*notice).clone()} />
        </div>
    }
}
