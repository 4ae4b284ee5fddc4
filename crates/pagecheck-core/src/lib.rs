pub mod config;
pub mod logging;

pub mod check;
pub mod fetch;
pub mod target;
