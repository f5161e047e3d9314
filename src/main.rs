use strokecare_gate::app_state::AppState;
use strokecare_gate::utils::Config;
use strokecare_gate::Application;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Config::default().expect("Failed to load config");
    let address = config.listen_addr().to_owned();
    if let Some(url) = config.verify_url() {
        log::info!("verifying credentials remotely via {url}");
    }

    let app_state = AppState::from_config(config);
    let app = Application::build(app_state, &address)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
