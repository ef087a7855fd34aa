pub mod admin;
pub mod events;
pub mod legacy;
pub mod words;
