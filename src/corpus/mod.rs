mod document;
mod loader;

pub use self::{document::Document, loader::load_directory};
