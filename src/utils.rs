pub mod date;
pub mod logs;
pub(crate) mod memory;
