pub mod convert;
pub mod policy;
