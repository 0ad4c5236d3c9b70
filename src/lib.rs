pub mod app;
pub mod backend;
pub mod core;
pub mod scanner;
