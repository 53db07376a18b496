pub mod apply;
pub mod delegation;
pub mod instructions;
