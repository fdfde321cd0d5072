// Startup (logging, config, mounting) runs from the library's wasm start hook.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("hrms-frontend runs in the browser; build it for wasm32-unknown-unknown");
}
