mod run_query;

pub use run_query::{ResolvedServer, RunQueryUseCase, FALLBACK_PROBE_HOST};
