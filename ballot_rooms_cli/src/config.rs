#[derive(Debug, serde::Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub logging_config: String,
    #[serde(default = "default_output_path")]
    pub default_output: String,
}

fn default_output_path() -> String {
    "rooms.json".into()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging_config: "info,ballot_rooms_backend=debug".into(),
            default_output: default_output_path(),
        }
    }
}

pub(crate) fn parse_config(content: &str) -> Result<Config, anyhow::Error> {
    Ok(serde_yaml::from_str::<Config>(content)?)
}

pub(crate) fn read_config_inner() -> Result<Config, anyhow::Error> {
    let config_path = std::env::var("BALLOT_ROOMS_CONFIG")?;
    let config = std::fs::read_to_string(config_path)?;
    parse_config(&config)
}

pub fn read_config() -> Config {
    match read_config_inner() {
        Ok(config) => config,
        Err(e) => {
            //Print to stderr, since logging is set up in the config
            eprintln!("Warning: Failed to read config: {}", e);
            Config::default()
        }
    }
}
