/// Popup state that does not depend on the DOM
use crate::error::ScoutError;
use crate::input::non_blank;
use crate::models::{LlmProvider, SettingsOut, SettingsUpdate};
use std::collections::HashSet;
use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupTab {
    Search,
    Track,
    Rank,
    Settings,
}

impl PopupTab {
    pub const ALL: [PopupTab; 4] = [PopupTab::Search, PopupTab::Track, PopupTab::Rank, PopupTab::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            PopupTab::Search => "Search",
            PopupTab::Track => "Track",
            PopupTab::Rank => "Rank",
            PopupTab::Settings => "Settings",
        }
    }
}

/// Exactly one tab header and its panel are active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    active: PopupTab,
}

impl TabSelection {
    pub fn new() -> Self {
        TabSelection {
            active: PopupTab::Search,
        }
    }

    pub fn select(self, tab: PopupTab) -> Self {
        TabSelection { active: tab }
    }

    pub fn is_active(&self, tab: PopupTab) -> bool {
        self.active == tab
    }

    /// CSS classes for a tab header or panel
    pub fn class_for(&self, base: &str, tab: PopupTab) -> String {
        if self.is_active(tab) {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    }
}

impl Default for TabSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// A popup control that triggers a backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Search,
    AddCompany,
    CheckNow,
    DeleteCompany(i64),
    UploadResume,
    Rank,
    SaveSettings,
}

impl Action {
    pub fn idle_label(&self) -> &'static str {
        match self {
            Action::Search => "Search this page",
            Action::AddCompany => "Track this page",
            Action::CheckNow => "Check for new jobs",
            Action::DeleteCompany(_) => "Remove",
            Action::UploadResume => "Upload resume",
            Action::Rank => "Rank jobs",
            Action::SaveSettings => "Save settings",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            Action::Search => "Searching...",
            Action::AddCompany => "Adding...",
            Action::CheckNow => "Checking...",
            Action::DeleteCompany(_) => "Removing...",
            Action::UploadResume => "Uploading...",
            Action::Rank => "Ranking...",
            Action::SaveSettings => "Saving...",
        }
    }
}

pub enum ActionEvent {
    Begin(Action),
    Settle(Action),
}

/// Which controls are in flight. Every other control is idle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionStates {
    in_flight: HashSet<Action>,
}

impl ActionStates {
    pub fn is_busy(&self, action: Action) -> bool {
        self.in_flight.contains(&action)
    }

    pub fn label(&self, action: Action) -> &'static str {
        if self.is_busy(action) {
            action.busy_label()
        } else {
            action.idle_label()
        }
    }
}

impl Reducible for ActionStates {
    type Action = ActionEvent;

    fn reduce(self: Rc<Self>, event: ActionEvent) -> Rc<Self> {
        let mut next = (*self).clone();
        match event {
            ActionEvent::Begin(action) => next.in_flight.insert(action),
            ActionEvent::Settle(action) => next.in_flight.remove(&action),
        };
        Rc::new(next)
    }
}

/// Runs `settle` when dropped, so the control returns to idle on every exit path
pub struct InFlight<F: FnOnce()> {
    settle: Option<F>,
}

impl<F: FnOnce()> InFlight<F> {
    pub fn new(settle: F) -> Self {
        InFlight { settle: Some(settle) }
    }
}

impl<F: FnOnce()> Drop for InFlight<F> {
    fn drop(&mut self) {
        if let Some(settle) = self.settle.take() {
            settle();
        }
    }
}

/// Inline message under a panel's controls
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
}

impl Notice {
    pub fn error(err: &ScoutError) -> Notice {
        Notice::Error(err.to_string())
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Settings panel inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsForm {
    pub provider: LlmProvider,
    pub api_key: String,
    pub ollama_model: String,
}

impl SettingsForm {
    /// Hosted providers take an API key
    pub fn shows_api_key(&self) -> bool {
        self.provider.is_hosted()
    }

    /// The local provider takes a model name
    pub fn shows_model(&self) -> bool {
        !self.provider.is_hosted()
    }

    /// Update body with hidden and blank fields left out
    pub fn to_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            llm_provider: self.provider,
            api_key: if self.shows_api_key() { non_blank(&self.api_key) } else { None },
            ollama_model: if self.shows_model() { non_blank(&self.ollama_model) } else { None },
        }
    }

    /// Form pre-filled from the server; the key is never sent back
    pub fn from_settings(settings: &SettingsOut) -> Self {
        SettingsForm {
            provider: settings.provider(),
            api_key: String::new(),
            ollama_model: settings.ollama_model.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_tab_selection_default() {
        let selection = TabSelection::default();
        assert!(selection.is_active(PopupTab::Search));
    }

    #[test]
    fn test_tab_selection_exactly_one_active() {
        let clicks = [
            PopupTab::Rank,
            PopupTab::Rank,
            PopupTab::Settings,
            PopupTab::Search,
            PopupTab::Track,
            PopupTab::Settings,
        ];

        let mut selection = TabSelection::new();
        for clicked in clicks {
            selection = selection.select(clicked);
            let active: Vec<PopupTab> = PopupTab::ALL.into_iter().filter(|t| selection.is_active(*t)).collect();
            assert_eq!(active, vec![clicked]);
        }
    }

    #[test]
    fn test_tab_classes() {
        let selection = TabSelection::new().select(PopupTab::Track);
        assert_eq!(selection.class_for("tab", PopupTab::Track), "tab active");
        assert_eq!(selection.class_for("tab", PopupTab::Rank), "tab");
    }

    #[test]
    fn test_action_labels_restore_after_settle() {
        let states = Rc::new(ActionStates::default());
        assert_eq!(states.label(Action::Search), "Search this page");

        let states = states.reduce(ActionEvent::Begin(Action::Search));
        assert!(states.is_busy(Action::Search));
        assert_eq!(states.label(Action::Search), "Searching...");
        assert!(!states.is_busy(Action::Rank));

        let states = states.reduce(ActionEvent::Settle(Action::Search));
        assert!(!states.is_busy(Action::Search));
        assert_eq!(states.label(Action::Search), "Search this page");
    }

    #[test]
    fn test_delete_actions_are_per_company() {
        let states = Rc::new(ActionStates::default()).reduce(ActionEvent::Begin(Action::DeleteCompany(1)));

        assert!(states.is_busy(Action::DeleteCompany(1)));
        assert!(!states.is_busy(Action::DeleteCompany(2)));
    }

    #[test]
    fn test_in_flight_settles_on_error_path() {
        let settled = Cell::new(false);

        let outcome: Result<(), String> = (|| {
            let _guard = InFlight::new(|| settled.set(true));
            Err("backend down".to_string())
        })();

        assert!(outcome.is_err());
        assert!(settled.get());
    }

    #[test]
    fn test_in_flight_settles_once() {
        let count = Cell::new(0);
        {
            let _guard = InFlight::new(|| count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_notice_from_error() {
        let notice = Notice::error(&ScoutError::NoActiveTab);
        assert_eq!(notice, Notice::Error("No active tab found.".to_string()));
        assert_eq!(notice.text(), "No active tab found.");
    }

    #[test]
    fn test_settings_form_hosted_provider() {
        let form = SettingsForm {
            provider: LlmProvider::Gemini,
            api_key: "  secret ".to_string(),
            ollama_model: "llama3".to_string(),
        };

        assert!(form.shows_api_key());
        assert!(!form.shows_model());
        assert_eq!(
            form.to_update(),
            SettingsUpdate {
                llm_provider: LlmProvider::Gemini,
                api_key: Some("secret".to_string()),
                ollama_model: None,
            }
        );
    }

    #[test]
    fn test_settings_form_local_provider() {
        let form = SettingsForm {
            provider: LlmProvider::Ollama,
            api_key: "ignored".to_string(),
            ollama_model: "   ".to_string(),
        };

        assert!(form.shows_model());
        assert_eq!(
            form.to_update(),
            SettingsUpdate {
                llm_provider: LlmProvider::Ollama,
                api_key: None,
                ollama_model: None,
            }
        );
    }

    #[test]
    fn test_settings_form_from_server() {
        let settings = SettingsOut {
            llm_provider: "ollama".to_string(),
            ollama_model: Some("mistral".to_string()),
        };

        let form = SettingsForm::from_settings(&settings);

        assert_eq!(form.provider, LlmProvider::Ollama);
        assert_eq!(form.ollama_model, "mistral");
        assert!(form.api_key.is_empty());
    }
}
