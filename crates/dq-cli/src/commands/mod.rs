pub mod catalog;
pub mod play;
