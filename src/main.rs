// src/main.rs
// DOCUMENTATION: Headless preview entry point
// PURPOSE: Run one page flow against the configured API and print the resulting page state
//
// Usage:
//   hbnb-preview [location] [token]          e.g. /index.html, "/place.html?id=42" abc
//   hbnb-preview /login.html <email> <password>

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    use hbnb_web_client::controller::Route;
    use hbnb_web_client::page::ids;
    use hbnb_web_client::session::token_cookie;
    use hbnb_web_client::{ClientConfig, HbnbApiClient, HeadlessPage, Page, PageAction, PageController};

    // 1. Load configuration (reads .env)
    let config = ClientConfig::from_env();
    if let Err(e) = config.validate() {
        anyhow::bail!("Configuration error: {}", e);
    }

    // 2. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    log::info!("Environment: {}", config.environment);
    log::info!("API: {}", config.api_base_url);

    // 3. Build the headless page for the requested location
    let args: Vec<String> = std::env::args().skip(1).collect();
    let location = args.first().cloned().unwrap_or_else(|| "/index.html".to_string());
    let route = Route::resolve(location.split('?').next().unwrap_or_default());

    let mut page = HeadlessPage::with_page_elements(&location);
    if route == Route::Login {
        page.set_value(ids::EMAIL, args.get(1).map(String::as_str).unwrap_or_default());
        page.set_value(ids::PASSWORD, args.get(2).map(String::as_str).unwrap_or_default());
    } else if let Some(token) = args.get(1) {
        page = page.with_cookie(&token_cookie(token));
    }

    // 4. Run the flow; on the login page also submit the form
    let controller = PageController::new(page, HbnbApiClient::new(&config));
    let bindings = controller.boot().await;
    for binding in &bindings {
        println!("bind #{} on {}", binding.element_id, binding.event.name());
        if binding.action == PageAction::Login {
            controller.handle(PageAction::Login).await;
        }
    }

    // 5. Report what the page ended up showing
    let page = controller.page();
    println!("route: {:?}", controller.route());
    for (id, html) in page.rendered() {
        println!("--- #{}\n{}", id, html);
    }
    for alert in page.alerts() {
        println!("alert: {}", alert);
    }
    for href in page.navigations() {
        println!("navigate: {}", href);
    }
    if !page.cookies().is_empty() {
        println!("cookies: {}", page.cookies());
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
