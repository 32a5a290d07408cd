/*!
Output formats for neighbor reports.
*/
pub mod table;

pub use table::{format_row, write_psv, write_table, TABLE_HEADER};
