use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::types::{BadgeAward, ReviewerStat};
use crate::types::config::DEFAULT_NAME_WIDTH;

pub const NO_REVIEWERS: &str = "No reviewers found.";

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Required,
    Optional,
    Total,
    Approved,
    WaitingForAuthor,
    Rejected,
    Pending,
}

impl Column {
    fn header(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Required => "Required",
            Column::Optional => "Optional",
            Column::Total => "Total",
            Column::Approved => "Approved",
            Column::WaitingForAuthor => "WaitingForAuthor",
            Column::Rejected => "Rejected",
            Column::Pending => "Pending",
        }
    }

    fn value(&self, stat: &ReviewerStat) -> usize {
        match self {
            Column::Name => 0,
            Column::Required => stat.required,
            Column::Optional => stat.optional,
            Column::Total => stat.total,
            Column::Approved => stat.approved,
            Column::WaitingForAuthor => stat.waiting_for_author,
            Column::Rejected => stat.rejected,
            Column::Pending => stat.pending,
        }
    }
}

const REQUIRED_VIEW: &[Column] = &[
    Column::Name,
    Column::Required,
    Column::Approved,
    Column::WaitingForAuthor,
    Column::Rejected,
    Column::Pending,
];

const FULL_VIEW: &[Column] = &[
    Column::Name,
    Column::Required,
    Column::Optional,
    Column::Total,
    Column::Approved,
    Column::WaitingForAuthor,
    Column::Rejected,
    Column::Pending,
];

/// Table layout options
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub required_only: bool,
    pub min_name_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            required_only: true,
            min_name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

/// Order rows by required count, then total count, both descending.
/// `sort_by` is stable, so remaining ties keep discovery order.
pub fn sort_for_display(stats: &mut [ReviewerStat]) {
    stats.sort_by(|a, b| b.required.cmp(&a.required).then(b.total.cmp(&a.total)));
}

/// Render the fixed-width workload table.
///
/// Rows are emitted in the order given; call [`sort_for_display`] first.
pub fn render(
    stats: &[ReviewerStat],
    total_prs: usize,
    options: RenderOptions,
    badge: Option<&BadgeAward<'_>>,
) -> String {
    if stats.is_empty() {
        return format!("{NO_REVIEWERS}\n");
    }

    let columns = if options.required_only {
        REQUIRED_VIEW
    } else {
        FULL_VIEW
    };
    let name_width = stats
        .iter()
        .map(|s| UnicodeWidthStr::width(s.display_name.as_str()))
        .chain(std::iter::once(options.min_name_width))
        .max()
        .unwrap_or(options.min_name_width);
    let width = |col: &Column| match col {
        Column::Name => name_width,
        other => other.header().len(),
    };

    let mut out = String::new();
    let view = if options.required_only {
        "required reviewers"
    } else {
        "all reviewers"
    };
    let _ = writeln!(out, "Reviewer workload across {total_prs} PRs ({view})");

    let header: Vec<String> = columns
        .iter()
        .map(|col| pad_right(col.header(), width(col)))
        .collect();
    push_row(&mut out, &header);

    let separator: Vec<String> = columns.iter().map(|col| "-".repeat(width(col))).collect();
    push_row(&mut out, &separator);

    for stat in stats {
        let cells: Vec<String> = columns
            .iter()
            .map(|col| match col {
                Column::Name => pad_right(&stat.display_name, width(col)),
                other => format!("{:>w$}", other.value(stat), w = width(other)),
            })
            .collect();
        push_row(&mut out, &cells);
    }

    if let Some(award) = badge {
        out.push('\n');
        let _ = writeln!(out, "{}", award.badge.display());
    }
    out
}

/// Left-justify `text` to `width` terminal columns. `{:<w$}` counts chars,
/// which misaligns wide (CJK, emoji) names.
fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{text}{}", " ".repeat(fill))
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push_str(cells.join(COLUMN_GAP).trim_end());
    out.push('\n');
}
