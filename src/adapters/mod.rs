//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text-generation adapters (OpenAI, mock)
//! - `memory` - In-memory document stores for tests and the demo binary

pub mod ai;
pub mod memory;
