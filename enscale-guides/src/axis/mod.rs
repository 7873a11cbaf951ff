pub mod layout;
pub mod opts;
