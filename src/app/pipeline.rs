use std::cell::RefCell;
use std::rc::Rc;

use super::state::{AppState, AppStatus, BackendEvent, update_status};
use crate::classifier::Model;
use crate::ui::window::show_alert;

/// Dispatch a classification request on the tokio runtime.
///
/// A repeat click while a request is in flight starts an independent request
/// that supersedes the earlier one: the seq stamp captured here decides which
/// completion the event handler still honors.
pub fn dispatch_classification(state: &Rc<RefCell<AppState>>, model: Model) {
    let file = match state.borrow().selected_file.clone() {
        Some(file) => file,
        None => {
            let window = state.borrow().window.as_ref().map(|w| w.window.clone());
            if let Some(window) = window {
                show_alert(&window, "No file selected!");
            }
            return;
        }
    };

    let (seq, endpoint, sender) = {
        let mut s = state.borrow_mut();
        s.request_seq += 1;
        (
            s.request_seq,
            s.config.endpoint_for(model).to_string(),
            s.backend_sender.clone(),
        )
    };

    log::info!("Classifying {} with {} via {endpoint}", file.name, model.label());
    update_status(
        state,
        AppStatus::Classifying,
        &format!("Classifying with {}...", model.label()),
    );

    state.borrow().tokio_rt.spawn(async move {
        let outcome = crate::classifier::classify(&endpoint, &file).await;
        let _ = sender
            .send(BackendEvent::ClassificationComplete { seq, outcome })
            .await;
    });
}
