//! Shared models and the property codec used by both the backend proxy and
//! the browser client.

pub mod codec;
pub mod forms;
pub mod model;
pub mod requests;
pub mod responses;
