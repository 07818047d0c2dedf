/// Background service worker
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// `chrome.runtime.onInstalled` details
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstallDetails {
    pub reason: String,
    #[serde(default)]
    pub previous_version: Option<String>,
}

pub fn install_message(details: &InstallDetails) -> String {
    match &details.previous_version {
        Some(previous) => format!("Job Scout {} (from {})", details.reason, previous),
        None => format!("Job Scout {}", details.reason),
    }
}

/// Log line for an install event; details Chrome sent in an unexpected shape still log
pub fn install_log_line(details: Option<&InstallDetails>) -> String {
    match details {
        Some(details) => install_message(details),
        None => "Job Scout installed".to_string(),
    }
}

/// `chrome.runtime.onInstalled` handler. The worker script registers the
/// listener synchronously and forwards here once the module is initialised.
#[wasm_bindgen]
pub fn handle_install(details: JsValue) {
    let details = serde_wasm_bindgen::from_value::<InstallDetails>(details).ok();
    log::info!("{}", install_log_line(details.as_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_message() {
        let details: InstallDetails = serde_json::from_str(r#"{"reason": "install"}"#).unwrap();
        assert_eq!(install_message(&details), "Job Scout install");
    }

    #[test]
    fn test_update_message() {
        let details: InstallDetails =
            serde_json::from_str(r#"{"reason": "update", "previousVersion": "0.0.9"}"#).unwrap();
        assert_eq!(install_message(&details), "Job Scout update (from 0.0.9)");
    }

    #[test]
    fn test_unreadable_details_still_logged() {
        assert_eq!(install_log_line(None), "Job Scout installed");

        let details: InstallDetails = serde_json::from_str(r#"{"reason": "chrome_update"}"#).unwrap();
        assert_eq!(install_log_line(Some(&details)), "Job Scout chrome_update");
    }
}
