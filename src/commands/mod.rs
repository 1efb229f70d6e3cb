//! CLI commands for docsim

pub mod rank;
