use std::cell::RefCell;
use std::rc::Rc;

use super::intake::SelectedFile;
use crate::classifier::ClassifyError;
use crate::config::Config;
use crate::ui::window::WindowWidgets;

/// Events sent from classification tasks to the GTK main thread.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    ClassificationComplete {
        seq: u64,
        outcome: Result<String, ClassifyError>,
    },
}

/// Application status.
#[derive(Debug, Clone, PartialEq)]
pub enum AppStatus {
    Idle,
    Classifying,
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    pub status: AppStatus,
    pub config: Config,
    /// Most recently accepted file. Replaced by the next accepted candidate,
    /// never cleared.
    pub selected_file: Option<SelectedFile>,
    /// Stamp of the most recently dispatched request. Completions carrying an
    /// older stamp have been superseded and are discarded.
    pub request_seq: u64,
    pub tokio_rt: tokio::runtime::Runtime,
    pub backend_sender: async_channel::Sender<BackendEvent>,

    // UI handles
    pub window: Option<WindowWidgets>,
}

impl AppState {
    pub fn new(sender: async_channel::Sender<BackendEvent>) -> Self {
        let config = Config::load();
        let tokio_rt = tokio::runtime::Runtime::new()
            .expect("Failed to create tokio runtime");

        Self {
            status: AppStatus::Idle,
            config,
            selected_file: None,
            request_seq: 0,
            tokio_rt,
            backend_sender: sender,
            window: None,
        }
    }
}

/// Helper to update status label and state.
pub fn update_status(
    state: &Rc<RefCell<AppState>>,
    status: AppStatus,
    label_text: &str,
) {
    let mut s = state.borrow_mut();
    s.status = status;
    if let Some(ref win) = s.window {
        win.status_label.set_text(label_text);
    }
}
