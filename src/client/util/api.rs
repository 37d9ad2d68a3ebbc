//! JSON requests from the browser to the server API.
//!
//! Errors are returned as the text to show inline: the server's `{"error": ...}` message when
//! there is one. Outside the web build every request fails with [`UNAVAILABLE`].

use serde::{de::DeserializeOwned, Serialize};

/// Shown when the API cannot be reached at all.
pub static UNAVAILABLE: &str =
    "The server could not be reached. Please call us at +1(919)633-2118 or +1(919)888-1810.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

/// `path` with `search` appended as an encoded `search` query parameter, when not blank.
pub fn with_search(path: &str, search: &str) -> String {
    let search = search.trim();
    if search.is_empty() {
        return path.to_string();
    }

    format!("{}?search={}", path, urlencoding::encode(search))
}

/// GET `url` and parse the JSON response.
pub async fn get<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    #[cfg(feature = "web")]
    {
        use reqwasm::http::{Request, RequestCredentials};

        let response = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|_| UNAVAILABLE.to_string())?;

        parse(response).await
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = url;
        Err(UNAVAILABLE.to_string())
    }
}

/// Send `body` as JSON to `url` and parse the JSON response.
pub async fn send<B: Serialize, T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<T, String> {
    #[cfg(feature = "web")]
    {
        use reqwasm::http::{Request, RequestCredentials};

        let body =
            serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

        let request = match method {
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
        };

        let response = request
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .body(body)
            .send()
            .await
            .map_err(|_| UNAVAILABLE.to_string())?;

        parse(response).await
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = (method, url, body);
        Err(UNAVAILABLE.to_string())
    }
}

#[cfg(feature = "web")]
async fn parse<T: DeserializeOwned>(response: reqwasm::http::Response) -> Result<T, String> {
    use crate::model::api::ErrorDto;

    if (200..300).contains(&response.status()) {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    match response.json::<ErrorDto>().await {
        Ok(error_dto) => Err(error_dto.error),
        Err(_) => Err(format!("Request failed with status {}", response.status())),
    }
}
