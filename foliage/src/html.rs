pub mod attributes;

pub use attributes::Attributes;
