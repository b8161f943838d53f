//! CLI commands for minpath

pub mod dispatch;
pub mod run;
pub mod script;
pub mod solve;
