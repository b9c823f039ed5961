// UGC analyzer: moderation verdict plus engagement insights for user text.
//
// This is the library root. The binary in main.rs only wires configuration
// and logging to these modules.

pub mod analysis;
pub mod config;
pub mod insights;
pub mod moderation;
pub mod openai;
pub mod output;
pub mod web;
