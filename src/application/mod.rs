// Application layer - the account service shared by every front end.

pub mod service;

pub use service::*;
