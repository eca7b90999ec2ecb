//! Turning model text into validated tips.
//!
//! The model is told to answer with raw JSON but sometimes wraps it in a
//! fenced block anyway. Everything here is pure so it can be tested without
//! a network.

use serde::Deserialize;
use tipwell_core::models::tip::{Tip, TipDetail};

use crate::error::TipError;
use crate::prompts::ITEM_COUNT;

const FENCE: &str = "```";

/// Strip an optional surrounding code fence.
///
/// A leading fence may carry a language tag (` ```json `); the body runs to
/// the last fence in the text. Unfenced text is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(after_open) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };

    let body = after_open
        .trim_start_matches([' ', '\t'])
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-');
    let body = match body.rfind(FENCE) {
        Some(end) => &body[..end],
        None => body,
    };
    body.trim()
}

/// Tip as the model may send it: only the title is mandatory.
#[derive(Debug, Deserialize)]
struct RawTip {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDetail {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    steps: Option<Vec<String>>,
}

fn parse_json(text: &str) -> Result<serde_json::Value, TipError> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|e| TipError::Format(format!("response is not valid JSON: {e}")))
}

/// Parse a tip list. Longer lists are cut to five; shorter ones are kept.
pub fn parse_tip_list(text: &str) -> Result<Vec<Tip>, TipError> {
    let value = parse_json(text)?;

    let serde_json::Value::Array(items) = value else {
        return Err(TipError::Format("expected a JSON array of tips".to_string()));
    };
    if items.is_empty() {
        return Err(TipError::Format("tip list is empty".to_string()));
    }

    items
        .into_iter()
        .take(ITEM_COUNT)
        .enumerate()
        .map(|(index, item)| {
            let raw: RawTip = serde_json::from_value(item)
                .map_err(|e| TipError::Format(format!("tip {index} is malformed: {e}")))?;
            validate_tip(index, raw)
        })
        .collect()
}

fn validate_tip(index: usize, raw: RawTip) -> Result<Tip, TipError> {
    let title = raw
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| TipError::Format(format!("tip {index} has no title")))?;

    let id = raw
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| slugify(&title));

    Ok(Tip {
        id,
        icon: raw.icon.unwrap_or_default(),
        title,
        category: raw.category.unwrap_or_default(),
        duration: raw.duration.unwrap_or_default(),
    })
}

/// Parse a tip detail: a non-empty description and an array of steps.
pub fn parse_tip_detail(text: &str) -> Result<TipDetail, TipError> {
    let value = parse_json(text)?;

    if !value.is_object() {
        return Err(TipError::Format("expected a JSON object".to_string()));
    }

    let raw: RawDetail = serde_json::from_value(value)
        .map_err(|e| TipError::Format(format!("tip detail is malformed: {e}")))?;

    let description = raw
        .description
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| TipError::Format("tip detail has no description".to_string()))?;
    let steps = raw
        .steps
        .ok_or_else(|| TipError::Format("tip detail has no steps".to_string()))?;

    Ok(TipDetail { description, steps })
}

/// Lowercase, hyphen-separated form of a title, used when the model omits an id.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
