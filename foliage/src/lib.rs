pub mod error;
pub mod html;
pub mod node;

#[cfg(feature = "axum")]
pub mod axum_html;

pub use error::RenderError;
pub use html::attributes::Attributes;
pub use node::{HtmlNode, LeafNode, Node, ParentNode, ToHtml};

#[cfg(feature = "axum")]
pub use axum_html::Page;
