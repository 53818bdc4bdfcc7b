pub mod contact;
pub mod countries;
pub mod phone;
pub mod submit;
