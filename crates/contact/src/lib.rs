mod dispatch;
mod panel;
mod value_object;

pub use dispatch::*;
pub use panel::*;
pub use value_object::*;
