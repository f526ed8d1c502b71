// Co-occurrence graph construction: node/edge tables and the two-pass
// corpus aggregation that produces them.

pub mod builder;
pub mod tables;
