// crates/serve/src/template.rs

//! Handlebars page shell.
//!
//! One built-in layout wraps the composed body in a full HTML document with
//! head metadata. The body arrives pre-rendered and is emitted unescaped
//! (triple-stash); everything else goes through handlebars' own escaping.

use handlebars::Handlebars;
use serde::Serialize;

use crate::RenderError;

const LAYOUT: &str = "\
<!doctype html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<title>{{title}} | {{site_title}}</title>
{{#if description}}<meta name=\"description\" content=\"{{description}}\">{{/if}}
<meta property=\"og:title\" content=\"{{title}}\">
{{#if description}}<meta property=\"og:description\" content=\"{{description}}\">{{/if}}
{{#each images}}<meta property=\"og:image\" content=\"{{this}}\">
{{/each}}
</head>
<body>
<main>
{{{body}}}
</main>
</body>
</html>
";

#[derive(Debug, Clone, Serialize)]
pub struct ShellModel {
    pub title: String,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub site_title: String,
    pub body: String,
}

pub struct ShellEngine {
    handlebars: Handlebars<'static>,
}

impl ShellEngine {
    pub fn new() -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string("layout", LAYOUT)?;
        Ok(Self { handlebars })
    }

    pub fn render(&self, model: &ShellModel) -> Result<String, RenderError> {
        Ok(self.handlebars.render("layout", model)?)
    }
}
