pub mod axis;
pub mod types;
