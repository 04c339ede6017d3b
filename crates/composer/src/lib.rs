mod composer;
mod error;

pub use composer::*;
pub use error::*;
