pub mod config;
pub mod plan;
pub mod roll;
pub mod run;
