pub mod files;
pub mod manifest;
pub mod pages;

pub use files::*;
pub use manifest::*;
pub use pages::*;
