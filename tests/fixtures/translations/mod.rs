//! Greeting translations compiled by the test suite.
//!
//! module crate::translations;

pub mod greeting_translation_english;
pub mod greeting_translation_hungarian;
pub mod greeting_translation_manager;
pub mod i_greeting_translation;
