/// Page-HTML relay run by the content script
///
/// The content script lives inside the page, so it can read the rendered DOM
/// that the popup cannot reach across origins. It answers a single request,
/// `{action: "getPageHTML"}`, with `{html, url}`.
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Messages the relay understands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action")]
pub enum RelayRequest {
    #[serde(rename = "getPageHTML")]
    GetPageHtml,
}

impl RelayRequest {
    /// `None` for anything that is not a recognised request
    pub fn parse(message: &serde_json::Value) -> Option<RelayRequest> {
        serde_json::from_value(message.clone()).ok()
    }
}

/// Serialized document markup and the URL it was read from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageSnapshot {
    pub html: String,
    pub url: String,
}

/// Whether the reply is delivered before the listener returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Sync,
    Async,
}

impl ResponseMode {
    /// The value the runtime expects the listener to return
    pub fn keeps_channel_open(self) -> bool {
        matches!(self, ResponseMode::Async)
    }
}

/// What the listener does with a message
pub enum Reply {
    /// Respond before returning
    Now(PageSnapshot),
    /// Respond once the future resolves; the channel stays open until then
    Later(Pin<Box<dyn Future<Output = PageSnapshot>>>),
    /// Not ours; no response is sent
    Ignore,
}

impl Reply {
    pub fn mode(&self) -> Option<ResponseMode> {
        match self {
            Reply::Now(_) => Some(ResponseMode::Sync),
            Reply::Later(_) => Some(ResponseMode::Async),
            Reply::Ignore => None,
        }
    }
}

/// Source of the page contents
pub trait PageReader {
    fn snapshot(&self) -> PageSnapshot;
}

/// The live document this script was injected into
pub struct DocumentReader;

impl PageReader for DocumentReader {
    fn snapshot(&self) -> PageSnapshot {
        let window = web_sys::window();
        let html = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| root.outer_html())
            .unwrap_or_default();
        let url = window
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();

        PageSnapshot { html, url }
    }
}

pub fn handle_message(message: &serde_json::Value, page: &impl PageReader) -> Reply {
    match RelayRequest::parse(message) {
        Some(RelayRequest::GetPageHtml) => Reply::Now(page.snapshot()),
        None => {
            log::debug!("Ignoring relay message: {}", message);
            Reply::Ignore
        }
    }
}

/// `chrome.runtime.onMessage` handler. The content script registers the
/// listener itself at injection time and forwards messages here; the return
/// value is what that listener returns.
#[wasm_bindgen]
pub fn relay_message(message: JsValue, send_response: js_sys::Function) -> bool {
    let message: serde_json::Value = match serde_wasm_bindgen::from_value(message) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Unreadable relay message: {}", e);
            return false;
        }
    };

    let reply = handle_message(&message, &DocumentReader);
    let keep_open = reply.mode().is_some_and(ResponseMode::keeps_channel_open);
    match reply {
        Reply::Now(snapshot) => respond(&send_response, &snapshot),
        Reply::Later(pending) => spawn_local(async move {
            let snapshot = pending.await;
            respond(&send_response, &snapshot);
        }),
        Reply::Ignore => {}
    }
    keep_open
}

fn respond(send_response: &js_sys::Function, snapshot: &PageSnapshot) {
    match serde_wasm_bindgen::to_value(snapshot) {
        Ok(value) => {
            if let Err(e) = send_response.call1(&JsValue::UNDEFINED, &value) {
                log::error!("Failed to send page snapshot: {:?}", e);
            }
        }
        Err(e) => log::error!("Failed to serialize page snapshot: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedPage;

    impl PageReader for FixedPage {
        fn snapshot(&self) -> PageSnapshot {
            PageSnapshot {
                html: "<html><body>Jobs</body></html>".to_string(),
                url: "https://example.com/careers".to_string(),
            }
        }
    }

    #[test]
    fn test_parse_get_page_html() {
        assert_eq!(
            RelayRequest::parse(&json!({"action": "getPageHTML"})),
            Some(RelayRequest::GetPageHtml)
        );
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!(RelayRequest::parse(&json!({"action": "getPageText"})), None);
        assert_eq!(RelayRequest::parse(&json!({"type": "getPageHTML"})), None);
        assert_eq!(RelayRequest::parse(&json!("getPageHTML")), None);
        assert_eq!(RelayRequest::parse(&json!(null)), None);
    }

    #[test]
    fn test_request_wire_format() {
        let json = serde_json::to_value(RelayRequest::GetPageHtml).unwrap();
        assert_eq!(json, json!({"action": "getPageHTML"}));
    }

    #[test]
    fn test_get_page_html_replies_synchronously() {
        let reply = handle_message(&json!({"action": "getPageHTML"}), &FixedPage);

        assert_eq!(reply.mode(), Some(ResponseMode::Sync));
        match reply {
            Reply::Now(snapshot) => {
                assert_eq!(snapshot.url, "https://example.com/careers");
                assert!(snapshot.html.contains("Jobs"));
            }
            _ => panic!("expected an immediate reply"),
        }
    }

    #[test]
    fn test_unknown_action_is_ignored() {
        let reply = handle_message(&json!({"action": "ping"}), &FixedPage);
        assert!(matches!(reply, Reply::Ignore));
        assert_eq!(reply.mode(), None);
    }

    #[test]
    fn test_response_modes() {
        assert!(!ResponseMode::Sync.keeps_channel_open());
        assert!(ResponseMode::Async.keeps_channel_open());

        let later = Reply::Later(Box::pin(async { FixedPage.snapshot() }));
        assert_eq!(later.mode(), Some(ResponseMode::Async));
    }

    #[test]
    fn test_snapshot_wire_format() {
        let snapshot = FixedPage.snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["url"], "https://example.com/careers");
        assert!(json["html"].is_string());
    }
}
