pub mod fixed;
pub mod render;
pub mod table;
pub mod utils;

pub use fixed::Q1x15;
pub use render::{format_and_print, parse_table, write_table};
pub use table::generate_table;
