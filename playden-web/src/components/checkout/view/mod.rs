pub mod methods;
pub mod schedule;
pub mod summary;
