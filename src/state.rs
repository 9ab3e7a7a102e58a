pub mod interactive;
pub mod registry;
pub mod session;
