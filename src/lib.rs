pub mod cli;
pub mod error;
pub mod menu;
pub mod page;
pub mod report;
pub mod rules;
pub mod scenario;
pub mod trace;
