#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(reelview::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The binary is only meaningful as a WASM bundle built with `csr`.
    eprintln!("reelview is a browser application; build with --features csr");
}
