pub mod attention;
pub mod loader;
pub mod navbar;
pub mod reveal;
pub mod scramble;
pub mod terminal;

#[cfg(feature = "parallax")]
pub mod parallax;
