pub mod error;
pub mod yearly;
