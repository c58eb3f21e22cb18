/// A single completion request: fixed instruction, templated user prompt and
/// sampling bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: usize,
    pub temperature: f32,
}
