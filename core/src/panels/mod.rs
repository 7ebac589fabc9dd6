pub mod alerts;
pub mod audit;
