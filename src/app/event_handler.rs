use std::cell::RefCell;
use std::rc::Rc;

use super::state::{AppState, AppStatus, BackendEvent, update_status};
use crate::classifier::ClassifyError;

const GENERIC_FAILURE: &str = "An error occurred during classification.";

/// Handle a backend event on the GTK main thread.
pub fn handle_backend_event(state: &Rc<RefCell<AppState>>, event: BackendEvent) {
    match event {
        BackendEvent::ClassificationComplete { seq, outcome } => {
            if seq != state.borrow().request_seq {
                log::info!("Discarding superseded response (seq {seq})");
                return;
            }

            let text = outcome_text(&outcome);
            log::info!("Classification finished: {text}");
            {
                let s = state.borrow();
                if let Some(ref win) = s.window {
                    win.results_label.set_text(&text);
                    // Fades in on the first completion, stays revealed after
                    win.output_area.set_reveal_child(true);
                }
            }
            update_status(state, AppStatus::Idle, "Idle");
        }
    }
}

/// Text rendered in the results area for a finished classification.
fn outcome_text(outcome: &Result<String, ClassifyError>) -> String {
    match outcome {
        Ok(prediction) => format!("Predicted Genre: {prediction}"),
        Err(ClassifyError::Server(error)) => format!("Error: {error}"),
        Err(ClassifyError::Other) => GENERIC_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_renders_genre_line() {
        let outcome = Ok("rock".to_string());
        assert_eq!(outcome_text(&outcome), "Predicted Genre: rock");
    }

    #[test]
    fn server_error_renders_verbatim() {
        let outcome = Err(ClassifyError::Server("unsupported sample rate".into()));
        assert_eq!(outcome_text(&outcome), "Error: unsupported sample rate");
    }

    #[test]
    fn generic_failure_renders_fixed_message() {
        let outcome: Result<String, ClassifyError> = Err(ClassifyError::Other);
        assert_eq!(outcome_text(&outcome), "An error occurred during classification.");
    }
}
