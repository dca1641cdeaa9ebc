pub mod bootstrap;
#[cfg(feature = "cli")]
pub mod commands;
