pub mod content;
pub mod playlist;
