use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) history_days: Option<u32>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,

    /// File the values came from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
    /// Problems met while looking for a config file; reported once logging is up
    #[serde(skip)]
    pub(crate) warnings: Vec<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        let mut warnings = Vec::new();

        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warnings.push(format!("Failed to read {}: {}", path.display(), e));
                    continue;
                }
            };
            match Self::parse(&content) {
                Ok(mut config) => {
                    config.source = Some(path);
                    config.warnings = warnings;
                    return config;
                }
                Err(e) => warnings.push(format!("Failed to parse {}: {}", path.display(), e)),
            }
        }

        Config {
            warnings,
            ..Self::default()
        }
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/habitctl/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("habitctl").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/habitctl/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("habitctl").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.habitctl.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".habitctl.toml"));
        }

        paths
    }
}
