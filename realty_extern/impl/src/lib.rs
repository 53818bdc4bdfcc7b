pub mod http;
pub mod lead;
