pub mod assignments;
pub mod audit;
pub mod catalog;
pub mod health;
pub mod profile;
