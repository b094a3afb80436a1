use sculptor::{AppAuthor, FileIO, ProjectInfo, impl_serde_str_toml};
use serde::{Deserialize, Serialize};

/// Tool-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Conf {
    /// Default step budget for evaluation; `None` runs unbounded.
    pub fuel: Option<u64>,
}

impl_serde_str_toml!(Conf);

impl AppAuthor for Conf {
    fn app_name() -> &'static str {
        "Skein"
    }

    fn author() -> &'static str {
        "skein-lang"
    }
}

impl Conf {
    /// Load the user configuration, writing defaults on first run.
    pub fn load_or_default() -> Conf {
        let path = Conf::config_dir().join("skein.toml");
        let file_conf = FileIO::new(path.clone());
        file_conf.load().unwrap_or_else(|_| {
            log::warn!("Using default configuration; suppose to find one at `{}`.", path.display());
            let conf = Conf::default();
            let _ = file_conf.save(&conf);
            conf
        })
    }
}
