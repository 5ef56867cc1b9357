pub mod access;
pub mod time;
