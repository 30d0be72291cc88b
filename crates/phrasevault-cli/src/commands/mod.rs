//! Command handlers for the Phrasevault CLI.

pub mod clear;
pub mod delete;
pub mod exchange;
pub mod generate;
pub mod list;
pub mod misc;
pub mod quiz;
pub mod show;
