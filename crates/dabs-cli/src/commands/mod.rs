pub mod dump;
pub mod extract;
pub mod map;
