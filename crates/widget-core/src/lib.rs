pub mod event_bus;
pub mod ports;
pub mod visibility;
pub mod session;
pub mod render;
pub mod widget;
pub mod reply;
pub mod embed;
pub mod persist;


pub use widget::{ChatWidget, Intent};
