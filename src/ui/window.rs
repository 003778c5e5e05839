use gtk4::prelude::*;
use libadwaita::prelude::*;

/// Handles returned from building the main window.
pub struct WindowWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub drop_zone: gtk4::Box,
    pub prompt_label: gtk4::Label,
    pub browse_button: gtk4::Button,
    pub classify_svm: gtk4::Button,
    pub classify_vgg: gtk4::Button,
    pub status_label: gtk4::Label,
    pub results_label: gtk4::Label,
    pub output_area: gtk4::Revealer,
}

/// Build the main window.
pub fn build_window(
    app: &libadwaita::Application,
    initial_prompt: &str,
) -> WindowWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Genre Scope")
        .default_width(460)
        .default_height(520)
        .build();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();
    toolbar_view.add_top_bar(&header);

    let css_provider = gtk4::CssProvider::new();
    css_provider.load_from_string(
        r#"
        .drop-zone {
            border: 2px dashed rgba(136, 136, 136, 0.6);
            border-radius: 12px;
            padding: 32px 16px;
        }
        .drop-zone.dragging {
            border-color: #3584e4;
            background-color: rgba(53, 132, 228, 0.12);
        }
        .results-text {
            font-size: 16px;
            font-weight: bold;
        }
        "#,
    );
    gtk4::style_context_add_provider_for_display(
        &gtk4::gdk::Display::default().unwrap(),
        &css_provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    // --- Drop zone ---
    let drop_zone = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    drop_zone.add_css_class("drop-zone");

    let prompt_label = gtk4::Label::new(Some(initial_prompt));
    prompt_label.add_css_class("dim-label");
    prompt_label.set_wrap(true);

    let browse_button = gtk4::Button::with_label("Browse\u{2026}");
    browse_button.set_halign(gtk4::Align::Center);

    drop_zone.append(&prompt_label);
    drop_zone.append(&browse_button);
    content.append(&drop_zone);

    // --- Classification actions, disabled until a file is accepted ---
    let actions = gtk4::Box::new(gtk4::Orientation::Horizontal, 12);
    actions.set_margin_top(16);
    actions.set_homogeneous(true);

    let classify_svm = gtk4::Button::with_label("Classify (SVM)");
    classify_svm.add_css_class("pill");
    classify_svm.set_sensitive(false);

    let classify_vgg = gtk4::Button::with_label("Classify (VGG)");
    classify_vgg.add_css_class("pill");
    classify_vgg.set_sensitive(false);

    actions.append(&classify_svm);
    actions.append(&classify_vgg);
    content.append(&actions);

    // --- Status group ---
    let status_group = libadwaita::PreferencesGroup::new();
    status_group.set_margin_top(16);

    let status_row = libadwaita::ActionRow::builder().title("Status").build();
    let status_label = gtk4::Label::new(Some("Idle"));
    status_label.add_css_class("dim-label");
    status_row.add_suffix(&status_label);
    status_group.add(&status_row);

    content.append(&status_group);

    // --- Output area, revealed once the first classification finishes ---
    let results_label = gtk4::Label::new(None);
    results_label.add_css_class("results-text");
    results_label.set_wrap(true);
    results_label.set_selectable(true);

    let output_area = gtk4::Revealer::builder()
        .transition_type(gtk4::RevealerTransitionType::Crossfade)
        .transition_duration(500)
        .reveal_child(false)
        .child(&results_label)
        .build();
    output_area.set_margin_top(16);
    content.append(&output_area);

    // Assemble
    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();
    toolbar_view.set_content(Some(&scrolled));
    window.set_content(Some(&toolbar_view));

    WindowWidgets {
        window,
        drop_zone,
        prompt_label,
        browse_button,
        classify_svm,
        classify_vgg,
        status_label,
        results_label,
        output_area,
    }
}

/// Modal message dialog, the desktop counterpart of a browser alert.
pub fn show_alert(parent: &impl IsA<gtk4::Window>, message: &str) {
    let dialog = gtk4::AlertDialog::builder()
        .message(message)
        .modal(true)
        .build();
    dialog.show(Some(parent));
}
