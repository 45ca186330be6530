//! Tauri-backed windowing host.

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};
use tracing::info;

use crate::lifecycle::{HostError, WindowHost};
use crate::window::WindowSpec;

/// [`WindowHost`] implementation over a live Tauri app handle.
///
/// Exit is deferred: `request_exit` only records the decision, and the
/// run-event dispatch lets the host's pending exit proceed (or suppresses
/// it with `prevent_exit`).
pub struct TauriHost {
    app: AppHandle,
    exit_requested: bool,
}

impl TauriHost {
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            exit_requested: false,
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

impl WindowHost for TauriHost {
    fn open_windows(&self) -> usize {
        self.app.webview_windows().len()
    }

    fn create_window(&mut self, spec: &WindowSpec) -> Result<(), HostError> {
        let url = spec
            .url
            .parse()
            .map_err(|err| HostError::InvalidTarget(format!("{}: {err}", spec.url)))?;

        // Host-API access for the page is granted statically in
        // capabilities/main-window.json, keyed on this label and origin.
        WebviewWindowBuilder::new(&self.app, spec.label.as_str(), WebviewUrl::External(url))
            .title(spec.title.as_str())
            .inner_size(spec.width, spec.height)
            .build()
            .map_err(|err| HostError::CreateWindow(err.to_string()))?;

        info!(
            label = %spec.label,
            width = spec.width,
            height = spec.height,
            url = %spec.url,
            "opened shell window"
        );
        Ok(())
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}
