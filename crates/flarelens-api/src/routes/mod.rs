pub mod alerts;
pub mod coaching;
pub mod health;
pub mod rehab;
pub mod samples;
pub mod summary;
