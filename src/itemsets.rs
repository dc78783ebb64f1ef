pub mod count;
pub mod driver;
pub mod index;
pub mod seed;
