pub mod http;
pub mod id;
pub mod logging;
