pub mod aging;
pub mod form;
pub mod format;
pub mod search;
