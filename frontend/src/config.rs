pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs work in both environments: Trunk proxies /api/ to the
        // booking API in development, nginx does the same in production.
        "".to_string()
    }
}
