use log::info;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::types::{AppResult, BadgeKind};

#[derive(Serialize)]
struct BadgeInfo {
    precedence: usize,
    emoji: &'static str,
    title: String,
    rule: &'static str,
}

fn catalogue() -> Vec<BadgeInfo> {
    BadgeKind::iter()
        .enumerate()
        .map(|(i, kind)| BadgeInfo {
            precedence: i + 1,
            emoji: kind.emoji(),
            title: kind.to_string(),
            rule: kind.rule(),
        })
        .collect()
}

pub async fn execute(format: &str) -> AppResult<()> {
    let badges = catalogue();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&badges)?);
        return Ok(());
    }

    let title_width = badges.iter().map(|b| b.title.len()).max().unwrap_or(0);
    info!("Badges (first matching rule wins, one per reviewer):");
    for b in &badges {
        info!(
            "  {}. {} {:<w$}  {}",
            b.precedence,
            b.emoji,
            b.title,
            b.rule,
            w = title_width
        );
    }
    Ok(())
}
