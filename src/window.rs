//! Fixed window configuration.

use serde::Serialize;

/// Parameters for the webview window the shell opens.
///
/// There is no user-facing configuration; `Default` carries the contract
/// with the dev server the shell fronts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSpec {
    /// Host-side label identifying the window. Must match the label the
    /// capability in `capabilities/` is scoped to.
    pub label: String,
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Address of the already-running local web server.
    pub url: String,
    /// Whether the served page may reach host capabilities through the
    /// webview bridge. Granted statically to the server's origin in
    /// `capabilities/main-window.json`.
    pub host_api_access: bool,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            label: "main".to_string(),
            title: "app-ui".to_string(),
            width: 1800.0,
            height: 800.0,
            url: "http://localhost:3000".to_string(),
            host_api_access: true,
        }
    }
}
