use std::future::Future;

use tipwell_core::models::tip::{Tip, TipDetail};
use tipwell_gemini::client::GeminiClient;
use tipwell_gemini::error::TipError;

/// Source of freshly generated tips. The cache layer only talks to this.
pub trait TipGenerator: Send + Sync {
    fn request_tip_list(
        &self,
        goal_label: &str,
        age: u8,
    ) -> impl Future<Output = Result<Vec<Tip>, TipError>> + Send;

    fn request_tip_detail(
        &self,
        goal_label: &str,
        tip_title: &str,
        age: u8,
    ) -> impl Future<Output = Result<TipDetail, TipError>> + Send;
}

impl TipGenerator for GeminiClient {
    fn request_tip_list(
        &self,
        goal_label: &str,
        age: u8,
    ) -> impl Future<Output = Result<Vec<Tip>, TipError>> + Send {
        GeminiClient::request_tip_list(self, goal_label, age)
    }

    fn request_tip_detail(
        &self,
        goal_label: &str,
        tip_title: &str,
        age: u8,
    ) -> impl Future<Output = Result<TipDetail, TipError>> + Send {
        GeminiClient::request_tip_detail(self, goal_label, tip_title, age)
    }
}
