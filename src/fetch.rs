/// Browser `fetch` transport for the backend client
use crate::api::{ApiClient, ApiRequest, Body, Method, RawResponse, Transport};
use crate::config::ApiConfig;
use crate::error::ScoutError;
use gloo_net::http::{Method as HttpMethod, RequestBuilder};
use web_sys::{File, FormData};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    type Upload = File;

    async fn send(&self, config: &ApiConfig, request: ApiRequest<File>) -> Result<RawResponse, ScoutError> {
        let url = config.url_for(&request.path);
        let builder = RequestBuilder::new(&url).method(http_method(request.method));

        let prepared = match request.body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            Body::Multipart { field, file } => {
                // No content-type header: the browser adds the multipart boundary
                let form = FormData::new().map_err(|e| ScoutError::Network(format!("{:?}", e)))?;
                form.append_with_blob_and_filename(field, &file, &file.name())
                    .map_err(|e| ScoutError::Network(format!("{:?}", e)))?;
                builder.body(form)
            }
        }
        .map_err(network_error)?;

        let response = prepared.send().await.map_err(network_error)?;
        let status = response.status();
        let body = if status == 204 {
            String::new()
        } else {
            response.text().await.map_err(network_error)?
        };

        Ok(RawResponse { status, body })
    }
}

fn http_method(method: Method) -> HttpMethod {
    match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Delete => HttpMethod::DELETE,
    }
}

fn network_error(err: gloo_net::Error) -> ScoutError {
    ScoutError::Network(err.to_string())
}

/// Client for the popup, pointed at the default backend
pub fn browser_client() -> ApiClient<FetchTransport> {
    ApiClient::new(FetchTransport, ApiConfig::default())
}
