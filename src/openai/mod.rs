// OpenAI-compatible HTTP API: the one provider behind both capabilities.
//
// A single authenticated client is shared by the moderation and the
// chat-completion implementations so the credential, base URL and timeout
// are configured in exactly one place.

pub mod client;
