pub mod alert;
pub mod navbar;
pub mod select;
