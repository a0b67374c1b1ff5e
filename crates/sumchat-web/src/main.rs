//! Entry point for the sumchat widget (browser by default, desktop with
//! `--no-default-features --features desktop`).

use sumchat_web::App;

fn main() {
    // In the browser the Dioxus logger forwards tracing to the console
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "sumchat_web=info,sumchat_core=info".to_string()),
        )
        .init();

    tracing::info!("Starting sumchat widget");

    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Sumchat")
        .with_inner_size(LogicalSize::new(480.0, 720.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App);
}
