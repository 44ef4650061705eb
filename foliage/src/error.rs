use thiserror::Error;

/// Failures raised while rendering a node tree. Construction never fails;
/// an invalid tree is only rejected when `to_html` walks it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("to_html is not implemented for a bare HtmlNode")]
    NotImplemented,
    #[error("leaf node must have a value")]
    MissingValue,
    #[error("parent node must have a tag")]
    MissingTag,
    #[error("parent node must have children")]
    MissingChildren,
}
