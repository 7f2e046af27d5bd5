pub mod text_file;

pub use text_file::{read_text, write_text};
