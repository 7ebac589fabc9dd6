pub mod dashboard;
pub mod panels;
pub mod session;
pub mod state;
pub mod store;
pub mod views;

pub mod error;

mod clock;
