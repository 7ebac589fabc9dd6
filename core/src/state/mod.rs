pub mod container;
pub mod model;
