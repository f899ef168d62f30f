//! Command handlers.

pub mod run;
pub mod serve;
pub mod system_info;
