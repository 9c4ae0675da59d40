pub mod grouping;
pub mod stats;
