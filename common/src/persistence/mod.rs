mod common;
pub use common::*;

mod images;
pub use images::*;

pub mod tempfiles;
