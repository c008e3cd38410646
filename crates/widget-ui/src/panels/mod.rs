pub mod widget;
pub mod customizer;
pub mod embed;
