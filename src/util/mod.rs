//! Small shared helpers: slugs, random codes, image file cleanup.

pub mod code;
pub mod images;
pub mod text;
