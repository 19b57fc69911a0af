#[derive(Debug, Clone)]
pub struct AppConfig {
    pub amadeus_base_url: String,
    pub iata_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub lookup_user_agent: String,
}
