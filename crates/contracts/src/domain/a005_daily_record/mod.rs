pub mod aggregate;
pub mod fields;
pub mod filter;
pub mod form;
