/// Console adapters following a build on stderr
mod progress_observer;
mod tracing_observer;

pub use progress_observer::ProgressBuildObserver;
pub use tracing_observer::TracingBuildObserver;
