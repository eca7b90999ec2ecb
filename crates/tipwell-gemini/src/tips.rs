//! The two tip operations: list and detail.
//!
//! Each validates the credential up front, then runs prompt → request →
//! parse under the client's retry policy.

use tipwell_core::models::tip::{Tip, TipDetail};
use tracing::info;

use crate::client::GeminiClient;
use crate::error::TipError;
use crate::parse;
use crate::prompts;
use crate::retry::with_retry;

impl GeminiClient {
    /// Request up to five tips for a goal and age.
    pub async fn request_tip_list(
        &self,
        goal_label: &str,
        age: u8,
    ) -> Result<Vec<Tip>, TipError> {
        self.api_key()?;

        let prompt_text = prompts::tip_list_prompt(goal_label, age);
        let prompt = prompt_text.as_str();
        info!(goal_label, age, "requesting tip list");

        let tips = with_retry(self.retry_policy(), "tip list", move |_attempt| async move {
            let text = self.generate_text(prompt).await?;
            parse::parse_tip_list(&text)
        })
        .await?;

        info!(goal_label, age, count = tips.len(), "tip list received");
        Ok(tips)
    }

    /// Request the description and steps for one tip.
    pub async fn request_tip_detail(
        &self,
        goal_label: &str,
        tip_title: &str,
        age: u8,
    ) -> Result<TipDetail, TipError> {
        self.api_key()?;

        let prompt_text = prompts::tip_detail_prompt(goal_label, tip_title, age);
        let prompt = prompt_text.as_str();
        info!(goal_label, tip_title, age, "requesting tip detail");

        let detail = with_retry(self.retry_policy(), "tip detail", move |_attempt| async move {
            let text = self.generate_text(prompt).await?;
            parse::parse_tip_detail(&text)
        })
        .await?;

        info!(goal_label, tip_title, steps = detail.steps.len(), "tip detail received");
        Ok(detail)
    }
}
