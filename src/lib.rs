//! Shell assembly: builds the Tauri app, opens the window, and wires the
//! run events to the lifecycle policy in [`lifecycle`].

pub mod host;
pub mod lifecycle;
pub mod window;

use tauri::RunEvent;
use tracing::{debug, info};

use crate::host::TauriHost;
use crate::lifecycle::Platform;
use crate::window::WindowSpec;

pub fn run() {
    init_logging();

    tauri::Builder::default()
        .setup(|app| {
            let mut shell = TauriHost::new(app.handle().clone());
            lifecycle::handle_ready(&mut shell, &WindowSpec::default())?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| match event {
            RunEvent::Ready => debug!("windowing host ready"),

            // Dock activation only exists on macOS.
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                let mut shell = TauriHost::new(app.clone());
                if let Err(err) = lifecycle::handle_activate(&mut shell, &WindowSpec::default()) {
                    tracing::warn!("activate could not reopen a window: {err}");
                }
            }

            // Fired by the host once the last window closes. Letting it
            // through exits the process; macOS suppresses it and stays
            // resident.
            RunEvent::ExitRequested { code: None, api, .. } => {
                let mut shell = TauriHost::new(app.clone());
                lifecycle::handle_all_windows_closed(&mut shell, Platform::current());
                if shell.exit_requested() {
                    info!("all windows closed, exiting");
                } else {
                    api.prevent_exit();
                }
            }

            _ => {}
        });
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
