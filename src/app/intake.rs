use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use gtk4::gio;
use gtk4::prelude::*;

use super::state::AppState;
use crate::ui::window::show_alert;

pub const DROP_PROMPT: &str = "Drag and drop your .wav file here";

/// Content types accepted as WAV. GLib's shared-mime-info reports the family
/// as audio/x-wav on most systems.
const WAV_TYPES: [&str; 3] = ["audio/wav", "audio/x-wav", "audio/vnd.wave"];

/// A validated candidate, held until replaced by the next accepted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub content_type: String,
}

/// Outcome of evaluating a candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Accepted(SelectedFile),
    Rejected { content_type: String },
}

/// Decide whether a candidate is a WAV file, going by its reported content
/// type only. File bytes are never inspected.
pub fn evaluate(name: &str, path: &Path, content_type: &str) -> IntakeOutcome {
    if WAV_TYPES.contains(&content_type) {
        IntakeOutcome::Accepted(SelectedFile {
            name: name.to_string(),
            path: path.to_path_buf(),
            content_type: content_type.to_string(),
        })
    } else {
        IntakeOutcome::Rejected {
            content_type: content_type.to_string(),
        }
    }
}

/// Run a dropped or picked file through intake and apply the outcome.
pub fn handle_candidate(state: &Rc<RefCell<AppState>>, file: &gio::File) {
    let Some(path) = file.path() else {
        log::warn!("Candidate has no local path: {}", file.uri());
        reject(state);
        return;
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    let (content_type, _uncertain) = gio::content_type_guess(Some(&path), &[]);

    match evaluate(&name, &path, content_type.as_str()) {
        IntakeOutcome::Accepted(selected) => {
            log::info!("Selected {} ({})", selected.name, selected.content_type);
            let mut s = state.borrow_mut();
            s.selected_file = Some(selected);
            if let Some(ref win) = s.window {
                win.prompt_label.set_text(&format!("Selected: {name}"));
                win.classify_svm.set_sensitive(true);
                win.classify_vgg.set_sensitive(true);
            }
        }
        IntakeOutcome::Rejected { content_type } => {
            log::info!("Rejected {name} ({content_type})");
            reject(state);
        }
    }
}

/// Alert and reset the prompt. A previously accepted file stays selected and
/// the classify buttons keep whatever sensitivity they had.
fn reject(state: &Rc<RefCell<AppState>>) {
    let window = {
        let s = state.borrow();
        let Some(ref win) = s.window else { return };
        win.prompt_label.set_text(DROP_PROMPT);
        win.window.clone()
    };
    show_alert(&window, "Please upload a valid .wav file.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reported_wav() {
        let outcome = evaluate("track.wav", Path::new("/music/track.wav"), "audio/wav");
        match outcome {
            IntakeOutcome::Accepted(selected) => {
                assert_eq!(selected.name, "track.wav");
                assert_eq!(selected.path, PathBuf::from("/music/track.wav"));
                assert_eq!(selected.content_type, "audio/wav");
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn accepts_glib_wav_aliases() {
        for ty in ["audio/x-wav", "audio/vnd.wave"] {
            assert!(matches!(
                evaluate("t.wav", Path::new("/t.wav"), ty),
                IntakeOutcome::Accepted(_)
            ));
        }
    }

    #[test]
    fn rejects_non_wav() {
        for ty in ["audio/mpeg", "audio/ogg", "text/plain", "application/octet-stream", ""] {
            assert_eq!(
                evaluate("song.mp3", Path::new("/song.mp3"), ty),
                IntakeOutcome::Rejected {
                    content_type: ty.to_string()
                }
            );
        }
    }

    #[test]
    fn rejects_wav_prefix_lookalikes() {
        assert!(matches!(
            evaluate("t.wav", Path::new("/t.wav"), "audio/wavpack"),
            IntakeOutcome::Rejected { .. }
        ));
    }
}
