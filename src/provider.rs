pub(crate) mod constants;
pub(crate) mod openrouter;

pub use openrouter::{GenerationConfig, OpenRouterConfig};
