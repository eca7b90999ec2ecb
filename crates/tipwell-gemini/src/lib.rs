//! tipwell-gemini
//!
//! Generative-text client for wellness tips: prompt construction, the
//! `generateContent` call, payload parsing and the single-retry policy.

pub mod client;
pub mod error;
pub mod parse;
pub mod prompts;
pub mod retry;
pub mod tips;
