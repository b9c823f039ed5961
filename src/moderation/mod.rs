// Content moderation: trait-based abstraction over the external classifier.
//
// The Moderator trait defines the interface. OpenAiModerator implements it
// with the OpenAI moderations endpoint; tests plug in fakes.

pub mod openai;
pub mod traits;
