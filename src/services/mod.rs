pub mod catalog;
pub mod contact;
pub mod destinations;
pub mod properties;
