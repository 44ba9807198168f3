//! Text-generation adapters.

mod mock;
mod openai;

pub use mock::MockTextGenerator;
pub use openai::{OpenAiConfig, OpenAiGenerator};
