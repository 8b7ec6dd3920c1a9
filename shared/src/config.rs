use dotenv::dotenv;

pub struct Config {
    pub database_url: String,
    pub screener_email: String,
    pub screener_password: String,
    pub download_dir: String,
    pub headless: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")?,
            screener_email: std::env::var("INTRADAY_SCREENER_EMAIL")?,
            screener_password: std::env::var("INTRADAY_SCREENER_PWD")?,
            download_dir: std::env::var("DOWNLOAD_DIR").unwrap_or_else(|_| ".".to_string()),
            headless: std::env::var("HEADLESS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        })
    }
}
