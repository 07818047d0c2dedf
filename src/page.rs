/// Access to the active tab from the popup
use crate::error::ScoutError;
use crate::relay::{PageSnapshot, RelayRequest};
use serde::{Deserialize, Serialize};
use url::Url;
use wasm_bindgen::prelude::*;

// Promise-returning tab APIs; awaiting them suspends the handler until Chrome answers
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = query, catch)]
    async fn query_tabs(query_info: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = sendMessage, catch)]
    async fn send_tab_message(tab_id: i32, message: JsValue) -> Result<JsValue, JsValue>;
}

/// The slice of `chrome.tabs.Tab` the popup needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveTab {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TabQuery {
    active: bool,
    current_window: bool,
}

/// Where the popup gets the page it works on
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Rendered markup and URL of the active tab
    async fn snapshot(&self) -> Result<PageSnapshot, ScoutError>;

    /// Address of the active tab, without reading the page
    async fn active_url(&self) -> Result<String, ScoutError>;
}

/// Content scripts never run on browser-internal pages
pub fn is_scriptable(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn require_scriptable(url: &str) -> Result<(), ScoutError> {
    if is_scriptable(url) {
        Ok(())
    } else {
        Err(ScoutError::PageUnreachable(format!("{} pages cannot be read", scheme_of(url))))
    }
}

/// The tab's URL, provided it is one a career page could live at
pub fn trackable_url(url: Option<String>) -> Result<String, ScoutError> {
    let url = url.ok_or_else(|| ScoutError::PageUnreachable("the tab has no address".to_string()))?;
    require_scriptable(&url)?;
    Ok(url)
}

/// Pick the usable tab out of a `chrome.tabs.query` result
pub fn pick_active_tab(tabs: Vec<ActiveTab>) -> Result<(i32, Option<String>), ScoutError> {
    tabs.into_iter()
        .find_map(|tab| tab.id.map(|id| (id, tab.url)))
        .ok_or(ScoutError::NoActiveTab)
}

/// The active tab of the current window. Page contents come through the
/// content script relay; the address comes straight from the tab.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeTabs;

impl ChromeTabs {
    async fn active_tab(&self) -> Result<(i32, Option<String>), ScoutError> {
        let query = serde_wasm_bindgen::to_value(&TabQuery {
            active: true,
            current_window: true,
        })?;
        let tabs_js = query_tabs(query).await.map_err(|e| {
            log::warn!("Tab query failed: {:?}", e);
            ScoutError::NoActiveTab
        })?;
        let tabs: Vec<ActiveTab> = serde_wasm_bindgen::from_value(tabs_js)?;

        pick_active_tab(tabs)
    }
}

impl PageSource for ChromeTabs {
    async fn snapshot(&self) -> Result<PageSnapshot, ScoutError> {
        let (tab_id, url) = self.active_tab().await?;

        if let Some(url) = url.as_deref() {
            require_scriptable(url)?;
        }

        let request = serde_wasm_bindgen::to_value(&RelayRequest::GetPageHtml)?;
        let reply = send_tab_message(tab_id, request)
            .await
            .map_err(|e| ScoutError::PageUnreachable(js_error_message(&e)))?;

        if reply.is_undefined() || reply.is_null() {
            return Err(ScoutError::PageUnreachable("no response from page".to_string()));
        }

        Ok(serde_wasm_bindgen::from_value(reply)?)
    }

    async fn active_url(&self) -> Result<String, ScoutError> {
        let (_, url) = self.active_tab().await?;
        trackable_url(url)
    }
}

fn scheme_of(url: &str) -> String {
    Url::parse(url)
        .map(|parsed| parsed.scheme().to_string())
        .unwrap_or_else(|_| "these".to_string())
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
