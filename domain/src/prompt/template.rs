//! System prompt defaults and resolution

/// Templates for the instructions sent to every backend
pub struct PromptTemplate;

impl PromptTemplate {
    /// Built-in system prompt used when neither configuration nor the
    /// caller supplies one
    pub fn default_system() -> &'static str {
        r#"You are a knowledgeable, careful assistant answering a question that is also being put to another model.
Give your own complete answer rather than a summary of possible answers.
Be accurate and specific. Support claims with reasoning or examples where they help, and say so plainly when you are unsure.
Use clear structure (short paragraphs, lists, or code blocks) when it makes the answer easier to follow."#
    }

    /// Pick the system prompt for one invocation.
    ///
    /// A caller override wins only when it is non-empty; an empty string
    /// falls back to `default`.
    pub fn resolve<'a>(override_prompt: Option<&'a str>, default: &'a str) -> &'a str {
        match override_prompt {
            Some(custom) if !custom.is_empty() => custom,
            _ => default,
        }
    }
}
