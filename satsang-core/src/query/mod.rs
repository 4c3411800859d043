pub mod filter;

pub use filter::FilterSpec;
