use adboard_web::app::App;

/// Client-side rendering entry point; trunk builds this into the wasm
/// bundle loaded by index.html.
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
