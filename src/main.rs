use fltk::{app, prelude::*};
use tracing::info;

use notepad::app::controllers::ThemeSync;
use notepad::app::domain::{Message, ShellConfig};
use notepad::app::infrastructure::settings_store::FileSettingsStore;
use notepad::app::shell::Shell;
use notepad::app::state::AppState;
use notepad::ui::main_window::build_main_window;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ShellConfig::default();
    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let store = FileSettingsStore::open(&config.store_organization, &config.store_application);
    info!(path = %store.path().display(), "reading theme from settings store");

    // Resolved before the window is shown so the first frame is already themed.
    let shell = Shell::new(ThemeSync::at_startup(&store, &config.theme_key));
    let widgets = build_main_window(&config, shell.status(), &sender);

    let mut state = AppState::new(widgets, shell, Box::new(store), sender);
    state.start_theme_watcher(config.theme_poll_interval);
    state.window.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle_message(msg);
        }
    }
    info!("window closed");
}
