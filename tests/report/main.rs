mod config_driven;
mod pipeline;
mod properties;

pub const QUEUE: &str = include_str!("../fixtures/queue.json");
