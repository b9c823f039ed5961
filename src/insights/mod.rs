// Engagement insights: free-form quality assessment from a chat model.
//
// The InsightGenerator trait is the seam; OpenAiInsightGenerator calls the
// chat-completions endpoint with a fixed analyst persona and prompt template.

pub mod openai;
pub mod prompt;
pub mod traits;
