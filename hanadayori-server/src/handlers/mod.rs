pub mod cards;
pub mod health;
pub mod images;
pub mod pages;
