//! Fixed pools the activity generators draw from.

pub mod pools;

pub use pools::{notes_templates, Location, CUSTOMERS, LOCATIONS};
