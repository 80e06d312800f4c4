pub mod columns;
pub mod geometry;
