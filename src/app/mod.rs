mod event_handler;
mod intake;
mod pipeline;
mod state;

pub use event_handler::handle_backend_event;
pub use intake::{handle_candidate, SelectedFile, DROP_PROMPT};
pub use pipeline::dispatch_classification;
pub use state::{AppState, BackendEvent};
