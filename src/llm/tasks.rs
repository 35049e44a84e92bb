//! Prompts for the built-in one-shot tasks.

/// A system prompt paired with the user prompt it frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPrompt {
    pub system: String,
    pub user: String,
}

pub const SUMMARIZE_SYSTEM_PROMPT: &str =
    "You are an expert at summarizing text. Provide a concise summary of the main points.";

pub const TRANSLATE_SYSTEM_PROMPT_TEMPLATE: &str =
    "You are an expert translator. Translate the given text to {target_language}.";

pub const ANALYZE_CODE_SYSTEM_PROMPT: &str = "You are a code review expert. Analyze the code \
     and provide insights, suggestions, and potential improvements.";

pub fn summarize(text: &str) -> TaskPrompt {
    TaskPrompt {
        system: SUMMARIZE_SYSTEM_PROMPT.to_string(),
        user: format!("Please summarize the following text:\n\n{text}"),
    }
}

#[allow(clippy::literal_string_with_formatting_args)]
pub fn translate(text: &str, target_language: &str) -> TaskPrompt {
    // {target_language} is a placeholder for string replacement, not a format argument
    TaskPrompt {
        system: TRANSLATE_SYSTEM_PROMPT_TEMPLATE.replace("{target_language}", target_language),
        user: format!("Please translate the following text:\n\n{text}"),
    }
}

pub fn analyze_code(code: &str) -> TaskPrompt {
    TaskPrompt {
        system: ANALYZE_CODE_SYSTEM_PROMPT.to_string(),
        user: format!("Please analyze the following code:\n\n```\n{code}\n```"),
    }
}
