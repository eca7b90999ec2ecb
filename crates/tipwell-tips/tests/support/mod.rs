//! Shared fixtures: a scripted tip generator that counts its calls.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tipwell_core::models::tip::{Tip, TipDetail};
use tipwell_gemini::error::TipError;
use tipwell_tips::generator::TipGenerator;

pub fn tip(id: &str, title: &str) -> Tip {
    Tip {
        id: id.to_string(),
        icon: "😴".to_string(),
        title: title.to_string(),
        category: "Sleep".to_string(),
        duration: "10 min".to_string(),
    }
}

pub fn sleep_tips() -> Vec<Tip> {
    vec![
        tip("wind-down-routine", "Start a Wind-Down Routine"),
        tip("cool-bedroom", "Keep Your Bedroom Cool"),
        tip("screen-curfew", "Set a Screen Curfew"),
        tip("consistent-wake", "Wake Up at the Same Time"),
        tip("caffeine-cutoff", "Cut Caffeine After Noon"),
    ]
}

pub fn detail() -> TipDetail {
    TipDetail {
        description: "A calming routine tells your body sleep is near.".to_string(),
        steps: vec![
            "Pick a start time".to_string(),
            "Dim the lights".to_string(),
            "Put devices away".to_string(),
            "Read or stretch".to_string(),
            "Keep it consistent".to_string(),
        ],
    }
}

/// Generator that replays scripted results, falling back to fixed fixtures.
#[derive(Default)]
pub struct FakeGenerator {
    pub list_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    list_script: Mutex<VecDeque<Result<Vec<Tip>, TipError>>>,
    detail_script: Mutex<VecDeque<Result<TipDetail, TipError>>>,
}

impl FakeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: Result<Vec<Tip>, TipError>) {
        self.list_script.lock().unwrap().push_back(result);
    }

    pub fn push_detail(&self, result: Result<TipDetail, TipError>) {
        self.detail_script.lock().unwrap().push_back(result);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

impl TipGenerator for FakeGenerator {
    async fn request_tip_list(&self, _goal_label: &str, _age: u8) -> Result<Vec<Tip>, TipError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.list_script.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| Ok(sleep_tips()))
    }

    async fn request_tip_detail(
        &self,
        _goal_label: &str,
        _tip_title: &str,
        _age: u8,
    ) -> Result<TipDetail, TipError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.detail_script.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| Ok(detail()))
    }
}
