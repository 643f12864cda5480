/// Base URL of the server hosting `/predict/`. Empty means same origin,
/// which is how the bundled backend serves the app.
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) => url.trim_end_matches('/'),
        None => "",
    }
}

pub fn prediction_endpoint() -> String {
    format!("{}/predict/", get_backend_url())
}
