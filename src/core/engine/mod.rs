pub mod aggregate;
pub mod badges;
pub mod render;
pub mod report;
pub mod scope;
