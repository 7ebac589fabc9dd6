pub mod controller;
pub mod identity;
