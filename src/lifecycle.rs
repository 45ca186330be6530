//! Desktop lifecycle policy.
//!
//! The decisions the shell makes at each host signal, written against an
//! abstract windowing host so they can be exercised without a running
//! webview.

use thiserror::Error;

use crate::window::WindowSpec;

/// Errors surfaced by a windowing host when a window request fails.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid window target: {0}")]
    InvalidTarget(String),

    #[error("window creation failed: {0}")]
    CreateWindow(String),
}

/// The slice of the windowing host the lifecycle policy drives.
///
/// The host owns the window set; this program only queries it and asks
/// for windows to be opened or for the process to end.
pub trait WindowHost {
    /// Number of windows currently open.
    fn open_windows(&self) -> usize;

    /// Ask the host to open a window described by `spec`.
    fn create_window(&mut self, spec: &WindowSpec) -> Result<(), HostError>;

    /// Ask the host to terminate the process once control returns to it.
    fn request_exit(&mut self);
}

/// Host platform, parsed from the runtime-reported identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os_identifier(std::env::consts::OS)
    }

    fn from_os_identifier(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// macOS convention: apps stay resident with no open windows.
    pub fn keeps_running_without_windows(self) -> bool {
        matches!(self, Self::MacOs)
    }
}

/// Host is ready: open the shell window.
pub fn handle_ready(host: &mut dyn WindowHost, spec: &WindowSpec) -> Result<(), HostError> {
    host.create_window(spec)
}

/// App was activated (dock click): reopen the window if none are left.
pub fn handle_activate(host: &mut dyn WindowHost, spec: &WindowSpec) -> Result<(), HostError> {
    if host.open_windows() == 0 {
        host.create_window(spec)?;
    }
    Ok(())
}

/// Last window closed: quit, unless the platform keeps apps resident.
pub fn handle_all_windows_closed(host: &mut dyn WindowHost, platform: Platform) {
    if !platform.keeps_running_without_windows() {
        host.request_exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory host that records every request made of it.
    #[derive(Default)]
    struct RecordingHost {
        open: usize,
        created: Vec<WindowSpec>,
        exit_requests: usize,
    }

    impl WindowHost for RecordingHost {
        fn open_windows(&self) -> usize {
            self.open
        }

        fn create_window(&mut self, spec: &WindowSpec) -> Result<(), HostError> {
            self.created.push(spec.clone());
            self.open += 1;
            Ok(())
        }

        fn request_exit(&mut self) {
            self.exit_requests += 1;
        }
    }

    #[test]
    fn ready_opens_exactly_one_window_with_the_fixed_spec() {
        let mut host = RecordingHost::default();
        handle_ready(&mut host, &WindowSpec::default()).unwrap();

        assert_eq!(host.created.len(), 1);
        assert_eq!(host.created[0], WindowSpec::default());
        assert_eq!(host.exit_requests, 0);
    }

    #[test]
    fn activate_reopens_a_window_when_none_are_left() {
        let mut host = RecordingHost::default();
        handle_activate(&mut host, &WindowSpec::default()).unwrap();

        assert_eq!(host.created.len(), 1);
        assert_eq!(host.created[0], WindowSpec::default());
    }

    #[test]
    fn activate_leaves_existing_windows_alone() {
        let mut host = RecordingHost {
            open: 1,
            ..Default::default()
        };
        handle_activate(&mut host, &WindowSpec::default()).unwrap();

        assert!(host.created.is_empty());
    }

    #[test]
    fn closing_the_last_window_quits_everywhere_but_macos() {
        for platform in [Platform::Windows, Platform::Linux, Platform::Other] {
            let mut host = RecordingHost::default();
            handle_all_windows_closed(&mut host, platform);
            assert_eq!(host.exit_requests, 1, "{platform:?}");
        }
    }

    #[test]
    fn macos_stays_resident_without_windows() {
        let mut host = RecordingHost::default();
        handle_all_windows_closed(&mut host, Platform::MacOs);
        assert_eq!(host.exit_requests, 0);
    }

    #[test]
    fn repeated_activations_only_ever_open_the_fixed_window() {
        let mut host = RecordingHost::default();
        handle_ready(&mut host, &WindowSpec::default()).unwrap();
        handle_activate(&mut host, &WindowSpec::default()).unwrap();
        host.open = 0;
        handle_activate(&mut host, &WindowSpec::default()).unwrap();

        assert_eq!(host.created.len(), 2);
        assert!(host.created.iter().all(|s| *s == WindowSpec::default()));
    }

    #[test]
    fn platform_identifier_parses_to_the_expected_tag() {
        assert_eq!(Platform::from_os_identifier("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_identifier("windows"), Platform::Windows);
        assert_eq!(Platform::from_os_identifier("linux"), Platform::Linux);
        assert_eq!(Platform::from_os_identifier("freebsd"), Platform::Other);
    }
}
