//! Cell formatting primitives. None of these fail: anything that cannot be
//! rendered comes back unchanged or as an empty string.

pub mod phone;
pub mod label;
pub mod date;
pub mod address;

pub use address::format_address;
pub use date::format_date;
pub use label::{select_by_label, select_by_labels, LabeledEntry};
pub use phone::{clean_phone_number, format_phone_number};
