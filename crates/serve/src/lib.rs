pub mod blocks;
pub mod compose;
pub mod html;
pub mod meta;
pub mod resolver;
pub mod richtext;
pub mod sitemap;
pub mod template;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("handlebars error: {0}")]
    Handlebars(#[from] handlebars::RenderError),
}
