//! Browser-independent half of the outfit page: wire models, response
//! interpretation, render plans, preview bookkeeping and page configuration.

pub mod config;
pub mod model;
pub mod requests;
pub mod submissions;
