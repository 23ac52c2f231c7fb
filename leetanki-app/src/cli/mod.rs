pub mod commands;
pub mod opts;
pub mod prompt;
pub mod session;
