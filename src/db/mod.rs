pub mod ad;
pub mod game;
pub mod health;
