pub mod model;
mod store;

pub use store::ScoreStore;
