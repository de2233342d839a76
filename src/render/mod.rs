mod escape;
mod html;

use crate::core::ast::Document;

pub use escape::{escape_html_attr, escape_html_text};
pub use html::HtmlRenderer;

pub trait Renderer {
    fn render(&self, document: &Document) -> String;
}
