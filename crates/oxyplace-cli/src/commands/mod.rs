pub mod annotate;
pub mod filter;
