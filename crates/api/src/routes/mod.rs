pub mod apple;
pub mod health;
