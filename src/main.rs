use gimnasio_web::config::CONFIG;
use gimnasio_web::App;

fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Gimnasio web ({}) -> {}", CONFIG.environment, CONFIG.backend_url);

    yew::Renderer::<App>::new().render();
}
