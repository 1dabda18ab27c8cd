pub mod model;
pub mod range;
