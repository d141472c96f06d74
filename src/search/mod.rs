//! Text search utilities for portal collections.
//!
//! This module provides the case-insensitive substring filter shared by
//! meeting search, member lookup, and the portal-wide search tool.

pub mod text_filter;

pub use text_filter::{filter_by_search, matches_search, normalize_text, try_filter_by_search};
