use gloo_net::http::{Method, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};

const SESSION_TOKEN_KEY: &str = "session_token";

/// Request builder for the booking API. Attaches the bearer token when one
/// is stored; public pages work without it.
pub fn api_request(method: Method, url: &str) -> RequestBuilder {
    let builder = RequestBuilder::new(url).method(method);
    match LocalStorage::get::<String>(SESSION_TOKEN_KEY) {
        Ok(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        Err(_) => builder,
    }
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    api_request(Method::GET, url)
}

pub fn authenticated_post(url: &str) -> RequestBuilder {
    api_request(Method::POST, url)
}

pub fn authenticated_put(url: &str) -> RequestBuilder {
    api_request(Method::PUT, url)
}

pub fn authenticated_delete(url: &str) -> RequestBuilder {
    api_request(Method::DELETE, url)
}
