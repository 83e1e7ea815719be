pub mod cache;

pub use cache::FitnessCache;
