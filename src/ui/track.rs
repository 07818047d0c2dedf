/// Track tab: companies under surveillance and their new postings

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use crate::actions::{add_company, check_companies, load_companies, remove_company};
use crate::error::ScoutError;
use crate::fetch::browser_client;
use crate::page::ChromeTabs;
use crate::present::{company_rows, new_job_cards, CompanyRow, JobCard, Listing};
use crate::ui::components::{begin, listing_html, ActionButton, JobCardView, NoticeView};
use crate::view_model::{Action, ActionStates, Notice};

/// The write went through but the list shown is out of date
fn stale_list(done: &str, err: &ScoutError) -> Notice {
    Notice::Info(format!("{}, but the company list could not be refreshed: {}", done, err))
}

#[function_component(TrackPanel)]
pub fn track_panel() -> Html {
    let states = use_reducer(ActionStates::default);
    let company_name = use_state(String::new);
    let companies = use_state(|| None::<Listing<CompanyRow>>);
    let new_jobs = use_state(|| None::<Listing<JobCard>>);
    let notice = use_state(|| None::<Notice>);

    // Load tracked companies on mount
    {
        let companies = companies.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_companies(&browser_client()).await {
                    Ok(list) => companies.set(Some(company_rows(&list))),
                    Err(e) => {
                        log::warn!("Failed to load companies: {}", e);
                        notice.set(Some(Notice::error(&e)));
                    }
                }
            });
            || ()
        });
    }

    let on_name_input = {
        let company_name = company_name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                company_name.set(input.value());
            }
        })
    };

    let on_add = {
        let dispatcher = states.dispatcher();
        let company_name = company_name.clone();
        let companies = companies.clone();
        let notice = notice.clone();

        Callback::from(move |_| {
            let guard = begin(&dispatcher, Action::AddCompany);
            let raw_name = (*company_name).clone();
            let company_name = company_name.clone();
            let companies = companies.clone();
            let notice = notice.clone();
            notice.set(None);

            spawn_local(async move {
                let _guard = guard;
                match add_company(&browser_client(), &ChromeTabs, &raw_name).await {
                    Ok(tracked) => {
                        company_name.set(String::new());
                        match tracked.companies {
                            Ok(list) => companies.set(Some(company_rows(&list))),
                            Err(e) => notice.set(Some(stale_list(&format!("Now tracking {}", tracked.company.name), &e))),
                        }
                    }
                    Err(e) => {
                        log::warn!("Add company failed: {}", e);
                        notice.set(Some(Notice::error(&e)));
                    }
                }
            });
        })
    };

    let on_check = {
        let dispatcher = states.dispatcher();
        let companies = companies.clone();
        let new_jobs = new_jobs.clone();
        let notice = notice.clone();

        Callback::from(move |_| {
            let guard = begin(&dispatcher, Action::CheckNow);
            let companies = companies.clone();
            let new_jobs = new_jobs.clone();
            let notice = notice.clone();
            notice.set(None);

            spawn_local(async move {
                let _guard = guard;
                match check_companies(&browser_client()).await {
                    Ok(report) => {
                        new_jobs.set(Some(new_job_cards(&report.new_jobs)));
                        match report.companies {
                            Ok(list) => companies.set(Some(company_rows(&list))),
                            Err(e) => notice.set(Some(stale_list("Check finished", &e))),
                        }
                    }
                    Err(e) => {
                        log::warn!("Surveillance check failed: {}", e);
                        notice.set(Some(Notice::error(&e)));
                    }
                }
            });
        })
    };

    let on_delete = {
        let dispatcher = states.dispatcher();
        let companies = companies.clone();
        let notice = notice.clone();

        Callback::from(move |id: i64| {
            let guard = begin(&dispatcher, Action::DeleteCompany(id));
            let companies = companies.clone();
            let notice = notice.clone();

            spawn_local(async move {
                let _guard = guard;
                match remove_company(&browser_client(), id).await {
                    Ok(list) => companies.set(Some(company_rows(&list))),
                    Err(e) => {
                        log::warn!("Remove company {} failed: {}", id, e);
                        notice.set(Some(Notice::error(&e)));
                    }
                }
            });
        })
    };

    let render_row = {
        let states = states.clone();
        move |row: &CompanyRow| {
            let id = row.id;
            html! {
                <div class="company-row">
                    <div class="company-info">
                        if row.career_url.is_empty() {
                            <span class="company-name">{&row.name}</span>
                        } else {
                            <a class="company-name" href={row.career_url.clone()} target="_blank" rel="noopener noreferrer">{&row.name}</a>
                        }
                        <span class="company-checked">{format!("Last checked: {}", row.last_checked)}</span>
                    </div>
                    <ActionButton
                        action={Action::DeleteCompany(id)}
                        states={states.clone()}
                        onclick={on_delete.reform(move |_: MouseEvent| id)}
                        block={false}
                        danger={true}
                    />
                </div>
            }
        }
    };

    html! {
        <div class="flex-column-gap">
            <label class="field-label" for="company-name">{"Company name"}</label>
            <input
                id="company-name"
                type="text"
                placeholder="e.g. Stripe"
                value={(*company_name).clone()}
                oninput={on_name_input}
            />
            <ActionButton action={Action::AddCompany} states={states.clone()} onclick={on_add} />
            <ActionButton action={Action::CheckNow} states={states.clone()} onclick={on_check} />
            <NoticeView notice={(*notice).clone()} />

            if let Some(listing) = &*new_jobs {
                <h2 class="stats-title">{"New jobs"}</h2>
                {listing_html(listing, |card| html! { <JobCardView card={card.clone()} /> })}
            }

            <h2 class="stats-title">{"Tracked companies"}</h2>
            if let Some(listing) = &*companies {
                {listing_html(listing, render_row)}
            }
        </div>
    }
}
