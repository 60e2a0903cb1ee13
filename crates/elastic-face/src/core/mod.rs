pub mod element;
pub mod modes;
pub mod time;
pub mod timer;
