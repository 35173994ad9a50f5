use std::env;

const ENV_PREFIX: &str = "LNURL";

/// Loads `{FILE_NAME}.{ENV}.toml`, `ENV` defaulting to `dev`, with
/// `LNURL_*` environment variables layered on top.
pub fn get_config_from_env<'a, T: 'a>() -> Result<T, config::ConfigError>
where
    T: serde::Deserialize<'a>,
{
    let environment: String = env::var("ENV").unwrap_or_else(|_| "dev".into());
    let file_name: String =
        env::var("FILE_NAME").map_err(|_| config::ConfigError::NotFound("FILE_NAME environment variable".into()))?;

    get_config(&file_name, &environment)
}

pub fn get_config<'a, T: 'a>(file_name: &str, environment: &str) -> Result<T, config::ConfigError>
where
    T: serde::Deserialize<'a>,
{
    let file_path = format!("{}.{}.toml", file_name, environment);

    let mut configuration = config::Config::default();
    configuration.merge(config::File::with_name(&file_path))?;
    configuration.merge(config::Environment::with_prefix(ENV_PREFIX).separator("__"))?;
    configuration.try_into()
}
