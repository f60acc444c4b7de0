// Library for tests to access modules

pub mod backfill;
pub mod cli;
pub mod config;
pub mod error;
pub mod window;
