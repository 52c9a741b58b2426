//! Prompt assembly for the generation backend.
//!
//! The instruction text pins down the menu format the backend must produce
//! (numbered entries, `↳` disambiguation lines) with a worked example, since
//! the command-table parser depends on that formatting.

use std::collections::HashMap;

use leon::Template;

use crate::error::Result;

const COMMAND_MENU_TEMPLATE: &str = r#"I want you to give me a series of options for a bash/zsh command, given what I want to do. Give them to me in a format where there is one per line, with numbers leading the line. Above each cli command, add a very short (max 10 words) comment disambiguating it from the others. Add extra newline in between options. It's very important that there is consistent formatting. For example, if I say "find string in files", you say:
1) grep "your_string" file.txt
    ↳ searches for "your_string" in file.txt.

2) grep "your_string" /path/to/directory/*
    ↳ searches all files in directory
{context}
Here's what I want to do:
{task}"#;

/// Renders the outbound prompt from the operator's task description and the
/// optional environment context.
///
/// # Errors
///
/// Returns an error if the template fails to parse or render.
pub fn build_prompt(task: &str, context: Option<&str>) -> Result<String> {
    let template = Template::parse(COMMAND_MENU_TEMPLATE)?;

    let context_block = match context {
        Some(context) if !context.is_empty() => {
            format!("\nHere is some context about my environment:\n{context}\n")
        }
        _ => String::new(),
    };

    let mut values: HashMap<String, String> = HashMap::new();
    values.insert("context".to_string(), context_block);
    values.insert("task".to_string(), task.to_string());

    let values = &values;
    Ok(template.render(&values)?)
}
