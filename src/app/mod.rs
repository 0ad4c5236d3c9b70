//! Application module

pub mod cli;
pub mod commands;
pub mod display;
pub mod session;
pub mod startup;
