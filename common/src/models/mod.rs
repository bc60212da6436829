mod form;
pub use form::*;

mod outcome;
pub use outcome::*;
