pub mod command;
pub mod dependency_injection;
pub mod navigator;
pub mod render;
pub mod session;
