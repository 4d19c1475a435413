pub mod forms;
pub mod preview;
pub mod results;
