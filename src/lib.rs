pub mod core;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::engine::aggregate::aggregate;
pub use core::engine::badges::{BadgePicker, FixedPicker, RandomPicker, classify_badges, select_badge};
pub use core::engine::render::{RenderOptions, render, sort_for_display};
pub use core::engine::report::{FeaturedBadge, Report, ReportOptions, generate};
pub use core::engine::scope::Scope;
pub use core::identity::{Identity, IdentityDirectory, NoDirectory, TableDirectory};
pub use core::main_shared::run_main;
