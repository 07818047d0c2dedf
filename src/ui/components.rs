/// Reusable UI components

use yew::prelude::*;
use patternfly_yew::prelude::*;
use crate::present::{JobCard, Listing, RankedCard};
use crate::view_model::{Action, ActionEvent, ActionStates, InFlight, Notice};

/// Mark `action` in flight; the returned guard marks it idle again when dropped
pub fn begin(
    states: &UseReducerDispatcher<ActionStates>,
    action: Action,
) -> InFlight<impl FnOnce() + 'static> {
    states.dispatch(ActionEvent::Begin(action));
    let states = states.clone();
    InFlight::new(move || states.dispatch(ActionEvent::Settle(action)))
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub action: Action,
    pub states: UseReducerHandle<ActionStates>,
    pub onclick: Callback<MouseEvent>,
    #[prop_or(true)]
    pub block: bool,
    #[prop_or(false)]
    pub danger: bool,
}

/// Button that disables itself and swaps to its progress label while in flight
#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let variant = if props.danger {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    html! {
        <Button
            onclick={props.onclick.clone()}
            disabled={props.states.is_busy(props.action)}
            variant={variant}
            block={props.block}
        >
            {props.states.label(props.action)}
        </Button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeView)]
pub fn notice_view(props: &NoticeProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let (alert_type, title) = match notice {
        Notice::Info(_) => (AlertType::Info, "Info"),
        Notice::Success(_) => (AlertType::Success, "Done"),
        Notice::Error(_) => (AlertType::Danger, "Error"),
    };

    html! {
        <div class="message-top-margin">
            <Alert r#type={alert_type} title={title} inline={true}>
                {notice.text().to_string()}
            </Alert>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct JobCardProps {
    pub card: JobCard,
}

#[function_component(JobCardView)]
pub fn job_card_view(props: &JobCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="job-card">
            <div class="job-title">{&card.title}</div>
            {for card.details.iter().map(|line| html! {
                <div class="job-detail">{line}</div>
            })}
            if let Some(link) = &card.link {
                <a class="job-link" href={link.clone()} target="_blank" rel="noopener noreferrer">{"View posting"}</a>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RankedCardProps {
    pub card: RankedCard,
}

#[function_component(RankedCardView)]
pub fn ranked_card_view(props: &RankedCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="job-card ranked">
            <div class="job-title">
                <span class="rank-position">{format!("#{}", card.position)}</span>
                {&card.title}
                <span class="rank-combined">{&card.combined}</span>
            </div>
            <div class="job-detail">
                {format!("{} · score {}", card.company, card.score)}
                if let Some(posted) = &card.posted {
                    {format!(" · posted {}", posted)}
                }
            </div>
            <p class="rank-reason">{&card.reason}</p>
            if let Some(link) = &card.link {
                <a class="job-link" href={link.clone()} target="_blank" rel="noopener noreferrer">{"View posting"}</a>
            }
        </div>
    }
}

/// Render each item, or the listing's empty message
pub fn listing_html<T>(listing: &Listing<T>, item: impl Fn(&T) -> Html) -> Html {
    match listing {
        Listing::Empty(message) => html! { <p class="empty-message">{*message}</p> },
        Listing::Items(items) => html! {
            <div class="card-list">
                {for items.iter().map(item)}
            </div>
        },
    }
}
