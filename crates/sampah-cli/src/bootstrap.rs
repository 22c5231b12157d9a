use anyhow::Context;

/// Load `.env` (if any) and the layered configuration.
pub fn load_config() -> anyhow::Result<sampah_config::SampahConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(error) if error.not_found() => {}
        Err(error) => return Err(error).context("failed to load .env file"),
    }
    sampah_config::SampahConfig::load().context("failed to load sampah configuration")
}
