//! CLI subcommand implementations, one per route plus the raw request verb.

pub mod bar;
pub mod games;
pub mod info;
pub mod portfolio;
pub mod request;
