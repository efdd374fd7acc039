pub mod case;
pub mod environment;
pub mod execution;
pub mod module;
pub mod project;
pub mod schedule;
pub mod stats;
pub mod suite;
