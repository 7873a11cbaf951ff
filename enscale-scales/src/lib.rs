pub mod formatter;
pub mod ticks;
