//! Service layer: load-mutate-save orchestration around the engine.

pub mod games;

pub use games::GameService;
