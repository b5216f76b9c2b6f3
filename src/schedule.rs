pub mod scheduler;
pub mod trigger;
