pub mod actions;
pub mod retry;
pub mod world;
