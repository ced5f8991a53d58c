pub mod cli;
pub mod cmds;
pub mod engine;
pub mod identity;
pub mod logging;
pub mod main_shared;
pub mod types;
