pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod template;

pub use error::*;
pub use loader::*;
pub use model::*;
pub use parser::*;
pub use template::{
    SITE_URL_PLACEHOLDER, TemplateProcessor, Variables, extract_variables, render_placeholders,
};
