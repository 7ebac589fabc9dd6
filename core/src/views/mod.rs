pub mod manager;
pub mod operator;
pub mod qa;
pub mod supervisor;
