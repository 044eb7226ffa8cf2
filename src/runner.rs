//! Application Runner Module
//!
//! Entry point functions called by the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use crate::config::AppConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the filter derived from `config`.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    if config.debug || config.verbose {
        tracing::info!("Debug logging enabled");
    }
}

/// Run the GUI application.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the window cannot be
/// opened. On macOS `Application::run` never returns, so a window open
/// failure is logged and the process exits with status 1 from inside the run
/// loop instead.
#[cfg(feature = "gui")]
pub fn run_gui(config: AppConfig) -> anyhow::Result<()> {
    use crate::gui::{register_keybindings, ChatWindow};
    use gpui::{
        prelude::*, px, size, App, Application, Bounds, QuitMode, SharedString, WindowBounds,
        WindowOptions,
    };
    use gpui_component::{Root, Theme, ThemeMode};
    use std::cell::RefCell;
    use std::rc::Rc;

    config.validate()?;

    let title = SharedString::from(config.title.clone());
    let session = config.new_session();
    let open_error: Rc<RefCell<Option<anyhow::Error>>> = Rc::default();
    let open_error_slot = open_error.clone();

    // Closing the last window ends the run loop, including on macOS
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .with_quit_mode(QuitMode::LastWindowClosed)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);
            Theme::change(ThemeMode::Light, None, cx);
            register_keybindings(cx);
            cx.activate(true);

            let bounds = Bounds::centered(None, size(px(1000.), px(750.)), cx);
            let opened = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(gpui::TitlebarOptions {
                        title: Some(title),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    let chat_view = cx.new(|cx| ChatWindow::new(session, window, cx));
                    cx.new(|cx| Root::new(chat_view, window, cx))
                },
            );

            if let Err(e) = opened {
                tracing::error!(error = %e, "Failed to open window");
                if cfg!(target_os = "macos") {
                    eprintln!("Error: failed to open chat window: {e:#}");
                    std::process::exit(1);
                }
                *open_error_slot.borrow_mut() = Some(e);
                cx.quit();
            }
        });

    let open_error = open_error.borrow_mut().take();
    match open_error {
        Some(e) => Err(e.context("failed to open chat window")),
        None => Ok(()),
    }
}

/// Stub used when the crate is built without the `gui` feature.
#[cfg(not(feature = "gui"))]
pub fn run_gui(config: AppConfig) -> anyhow::Result<()> {
    config.validate()?;
    anyhow::bail!("echo-chat was built without the `gui` feature")
}
