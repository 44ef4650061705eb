use axum_core::body::Body;
use axum_core::response::{IntoResponse, Response};
use http::{header, HeaderValue, StatusCode};

use crate::node::{Node, ToHtml};

/// A root node served as a complete HTML response.
pub struct Page(pub Node);

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        match self.0.to_html() {
            Ok(html) => {
                let mut response = Body::from(html).into_response();
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/html; charset=utf-8"),
                );
                response
            }
            Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
        }
    }
}
