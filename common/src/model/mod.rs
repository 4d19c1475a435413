pub mod form;
pub mod preview;
pub mod render;
pub mod result;
pub mod suggestion;
