pub mod init;
pub mod print;
pub mod report;

pub use init::execute_init;
pub use print::execute_print;
pub use report::execute_report;
