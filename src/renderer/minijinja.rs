use super::filters::*;
use crate::{error::Result, renderer::interface::TemplateRenderer};
use minijinja::{syntax::SyntaxConfig, AutoEscape, Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
///
/// Scaffold templates use `<$ ... $>` for variables and `<% ... %>` for
/// blocks so generated sources can contain `{{ ... }}` literally.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with the scaffold syntax.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_syntax(scaffold_syntax());
        // An undefined variable is a template authoring error, not an
        // empty string.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        // Add all the custom filters
        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("train_case", to_train_case);
        env.add_filter("regex", regex_filter);

        Self { env }
    }
}

fn scaffold_syntax() -> SyntaxConfig {
    SyntaxConfig::builder()
        .block_delimiters("<%", "%>")
        .variable_delimiters("<$", "$>")
        .comment_delimiters("<#", "#>")
        .build()
        .expect("scaffold template delimiters are valid")
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or("inline");
        Ok(self.env.render_named_str(name, template, context)?)
    }
}
