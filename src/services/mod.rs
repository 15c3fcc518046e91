pub mod ai;
pub mod calls;
pub mod mail;
