// Suggestion generation: prompt construction and the single request to the
// generative-text endpoint. All HTTP goes through llm_client.

pub mod prompts;
pub mod suggestions;
