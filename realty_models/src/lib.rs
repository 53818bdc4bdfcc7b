pub mod contact;
pub mod country;
pub mod lead;
mod macros;
pub mod phone;
