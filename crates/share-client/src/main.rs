//! Share Button Client
//!
//! Yew WASM implementation of the `<browserux-share-button>` element.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "share-client only supports wasm32 target. Use: cargo check -p share-client --target wasm32-unknown-unknown"
);

mod browser;
mod components;
mod host;
mod keyboard;
mod style;
mod util;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    let activated = host::define_share_buttons();
    tracing::info!(activated, "share buttons defined");
}

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
