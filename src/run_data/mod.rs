pub mod field;
pub mod selector;
pub mod synthetic;
