pub mod error;
pub mod response_schema;
