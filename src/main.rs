mod app;
mod classifier;
mod config;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::gdk;
use gtk4::gio;
use gtk4::prelude::*;
use libadwaita::prelude::*;

use app::{AppState, BackendEvent};
use classifier::Model;

fn main() {
    env_logger::init();
    log::info!("Genre Scope starting");

    let application = libadwaita::Application::builder()
        .application_id("com.github.genre-scope")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    // Create async channel for backend → UI communication
    let (backend_tx, backend_rx) = async_channel::unbounded::<BackendEvent>();

    // Build app state
    let state = Rc::new(RefCell::new(AppState::new(backend_tx)));

    // Build UI
    let widgets = ui::window::build_window(app, app::DROP_PROMPT);

    // Wire up the drop zone
    {
        let state_clone = state.clone();
        let target =
            gtk4::DropTarget::new(gdk::FileList::static_type(), gdk::DragAction::COPY);

        let zone_enter = widgets.drop_zone.clone();
        target.connect_enter(move |_, _, _| {
            zone_enter.add_css_class("dragging");
            gdk::DragAction::COPY
        });

        let zone_leave = widgets.drop_zone.clone();
        target.connect_leave(move |_| {
            zone_leave.remove_css_class("dragging");
        });

        let zone_drop = widgets.drop_zone.clone();
        target.connect_drop(move |_, value, _, _| {
            zone_drop.remove_css_class("dragging");
            let Ok(files) = value.get::<gdk::FileList>() else {
                return false;
            };
            // Only the first file of a multi-file drop is considered
            match files.files().first() {
                Some(file) => {
                    app::handle_candidate(&state_clone, file);
                    true
                }
                None => false,
            }
        });

        widgets.drop_zone.add_controller(target);
    }

    // Wire up the browse button
    {
        let state_clone = state.clone();
        let parent = widgets.window.clone();
        widgets.browse_button.connect_clicked(move |_| {
            let filter = gtk4::FileFilter::new();
            filter.set_name(Some("WAV audio"));
            filter.add_suffix("wav");
            filter.add_mime_type("audio/wav");

            let filters = gio::ListStore::new::<gtk4::FileFilter>();
            filters.append(&filter);

            let dialog = gtk4::FileDialog::builder()
                .title("Choose a .wav file")
                .filters(&filters)
                .modal(true)
                .build();

            let state_inner = state_clone.clone();
            dialog.open(Some(&parent), None::<&gio::Cancellable>, move |result| {
                match result {
                    Ok(file) => app::handle_candidate(&state_inner, &file),
                    Err(e) => log::debug!("File dialog dismissed: {e}"),
                }
            });
        });
    }

    // Wire up the classify buttons
    {
        let state_clone = state.clone();
        widgets.classify_svm.connect_clicked(move |_| {
            app::dispatch_classification(&state_clone, Model::Svm);
        });
    }
    {
        let state_clone = state.clone();
        widgets.classify_vgg.connect_clicked(move |_| {
            app::dispatch_classification(&state_clone, Model::Vgg);
        });
    }

    // Store UI handles in state
    state.borrow_mut().window = Some(widgets);

    // Show the window
    state.borrow().window.as_ref().unwrap().window.present();

    // Attach backend event handler
    {
        let state_clone = state.clone();
        gtk4::glib::spawn_future_local(async move {
            while let Ok(event) = backend_rx.recv().await {
                app::handle_backend_event(&state_clone, event);
            }
        });
    }
}
