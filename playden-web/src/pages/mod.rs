pub mod game;
pub mod not_found;
pub mod purchases;
pub mod reservations;
pub mod shop;
