mod result_renderer;

pub use result_renderer::{ResultRenderer, NO_RESULTS_LINE};
