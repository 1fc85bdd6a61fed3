pub const INPUT_PLACEHOLDER: &str = "{input}";

pub const DEFAULT_PROMPT_TEMPLATE: &str = "You are a fun and interactive Twitch AI assistant named ChatBot-X. Respond humorously:
User: {input}
ChatBot-X:";

/// Plain-text prompt with `{input}` placeholders. The user input is
/// interpolated verbatim, nothing is escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, input: &str) -> String {
        self.template.replace(INPUT_PLACEHOLDER, input)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT_TEMPLATE)
    }
}
