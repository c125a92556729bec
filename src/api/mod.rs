pub mod docs;
pub mod scores;
