//! Template rendering for scaffold templates.
//!
//! - `interface`: the engine-agnostic rendering trait
//! - `minijinja`: the MiniJinja-backed implementation
//! - `filters`: custom value-formatting filters

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;

/// Creates the default template engine.
pub fn get_template_engine() -> impl TemplateRenderer {
    MiniJinjaRenderer::new()
}
