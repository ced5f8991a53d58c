use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Route `log` records to stderr; stdout is reserved for report output.
/// Must run after config init so level and color settings apply.
pub fn init_logging() {
    let level = parse_level(config().log().level());
    let use_color = colors_enabled();
    console::set_colors_enabled_stderr(use_color);

    let dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            // Info lines are user-facing output and carry no prefix
            if record.level() == Level::Info {
                return out.finish(format_args!("{message}"));
            }
            let tag = match record.level() {
                Level::Error => style("error").red().bold().for_stderr(),
                Level::Warn => style("warn").yellow().bold().for_stderr(),
                Level::Debug => style("debug").blue().for_stderr(),
                _ => style("trace").dim().for_stderr(),
            };
            out.finish(format_args!("{tag}: {message}"))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Err(e) = dispatch.apply() {
        eprintln!("failed to initialize logging: {e}");
    }
}
