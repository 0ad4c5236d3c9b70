//! Test modules for the scanner system
//!
//! Orchestrator behaviour is driven through in-process backends defined in
//! `helpers`; no network is involved.

pub mod helpers;
