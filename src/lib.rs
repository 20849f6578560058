//! Transformation Assistant - change-management risk scanner
//!
//! Scores pasted stakeholder notes against a weighted keyword table,
//! reports a risk level with a readiness estimate, and drafts leadership
//! guidance through a pluggable LLM gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
