// src/lib.rs
//! Pulls power-outage schedules out of the visible text of a lookup result page.
//!
//! The [`extractors`] pipeline is pure: string in, [`ExtractionResult`] out.
//! [`portal`], [`storage`] and [`report`] are the plumbing the CLI wraps
//! around it.
pub mod extractors;
pub mod portal;
pub mod report;
pub mod storage;
pub mod utils;

pub use extractors::{extract, ExtractionResult, ExtractorConfig, LookaheadPolicy, OutageEntry, OutageExtractor};
