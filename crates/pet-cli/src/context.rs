use pet_config::PetConfig;
use pet_store::PetStore;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::resolve_format;

/// Everything a command handler needs.
#[derive(Debug)]
pub struct AppContext {
    pub store: PetStore,
    pub format: OutputFormat,
}

impl AppContext {
    /// Bind the store, letting `--store` override `storage.path`.
    #[must_use]
    pub fn new(config: &PetConfig, flags: &GlobalFlags) -> Self {
        let store = match flags.store.as_deref() {
            Some(path) => PetStore::open(path),
            None => PetStore::from_config(&config.storage),
        };
        Self {
            store,
            format: resolve_format(flags.format, config.general.pretty),
        }
    }

    /// Context over an explicit storage file, raw output.
    #[cfg(test)]
    pub fn for_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            store: PetStore::open(path),
            format: OutputFormat::Raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn flags(store: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: None,
            quiet: false,
            verbose: false,
            store: store.map(str::to_string),
        }
    }

    #[test]
    fn uses_configured_path_by_default() {
        let ctx = AppContext::new(&PetConfig::default(), &flags(None));
        assert_eq!(ctx.store.path(), Path::new("pets.json"));
        assert_eq!(ctx.format, OutputFormat::Json);
    }

    #[test]
    fn store_flag_overrides_config() {
        let ctx = AppContext::new(&PetConfig::default(), &flags(Some("/tmp/other.json")));
        assert_eq!(ctx.store.path(), Path::new("/tmp/other.json"));
    }
}
