pub mod frames;
pub mod location;
pub mod model;
pub mod variable;
