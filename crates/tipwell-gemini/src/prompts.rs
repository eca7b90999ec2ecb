//! Prompt text for the two request kinds.
//!
//! Both prompts are deterministic in their inputs so identical requests
//! produce identical upstream calls.

/// Number of tips requested per list and steps per detail.
pub const ITEM_COUNT: usize = 5;

pub const MAX_TITLE_CHARS: usize = 40;

pub const MAX_DESCRIPTION_WORDS: usize = 120;

pub const MAX_STEP_WORDS: usize = 20;

pub fn tip_list_prompt(goal_label: &str, age: u8) -> String {
    format!(
        "Generate exactly {ITEM_COUNT} practical, safe wellness tips for a {age}-year-old person \
         whose goal is {goal_label}.\n\
         Respond with ONLY raw JSON: no markdown, no code fences, no commentary.\n\
         The JSON must be an array of exactly {ITEM_COUNT} objects with this shape:\n\
         [{{\"id\": \"kebab-case-identifier\", \"icon\": \"a single emoji\", \
         \"title\": \"at most {MAX_TITLE_CHARS} characters\", \
         \"category\": \"one or two words\", \"duration\": \"e.g. 5 min\"}}]\n\
         Each id must be unique, lowercase and hyphen-separated."
    )
}

pub fn tip_detail_prompt(goal_label: &str, tip_title: &str, age: u8) -> String {
    format!(
        "Explain the wellness tip \"{tip_title}\" for a {age}-year-old person whose goal is \
         {goal_label}.\n\
         Respond with ONLY raw JSON: no markdown, no code fences, no commentary.\n\
         The JSON must be a single object with this shape:\n\
         {{\"description\": \"at most {MAX_DESCRIPTION_WORDS} words\", \
         \"steps\": [\"step one\", \"step two\"]}}\n\
         The steps array must contain exactly {ITEM_COUNT} items, each at most \
         {MAX_STEP_WORDS} words."
    )
}
