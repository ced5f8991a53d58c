use crate::types::AppResult;
use crate::types::config::Config;

pub mod badges;
pub mod config;

pub enum PrintCommand {
    Config(String),
    Badges(String),
}

pub async fn execute_print(command: PrintCommand, cfg: &Config) -> AppResult<()> {
    match command {
        PrintCommand::Config(format) => config::execute(&format, cfg).await,
        PrintCommand::Badges(format) => badges::execute(&format).await,
    }
}
