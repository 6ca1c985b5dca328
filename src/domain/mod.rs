mod account;
mod error;
mod money;
mod operation;

pub use account::*;
pub use error::*;
pub use money::*;
pub use operation::*;
