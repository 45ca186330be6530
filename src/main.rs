// app-ui — Tauri shell
// The frontend is served by the local dev server; this backend only
// provides the native window and the desktop lifecycle around it.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    app_ui_lib::run();
}
