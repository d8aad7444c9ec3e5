pub mod clock;
pub mod week_days;
