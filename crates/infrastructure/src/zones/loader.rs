use std::io;
use std::path::{Path, PathBuf};
use tern_dns_domain::{DomainError, ZoneSet};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ZoneLoadError {
    #[error("Failed to read zone file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Reads the TOML zone file into a [`ZoneSet`].
pub struct ZoneLoader;

impl ZoneLoader {
    pub fn read(path: impl AsRef<Path>) -> Result<ZoneSet, ZoneLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ZoneLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ZoneSet::from_toml(&content)?)
    }

    /// Like [`ZoneLoader::read`], but a missing or broken file only costs
    /// the local zones: the server keeps running with none.
    pub fn load_or_empty(path: impl AsRef<Path>) -> ZoneSet {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(zones) => {
                info!(path = %path.display(), zones = zones.len(), "Local zones loaded");
                zones
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Running without local zones");
                ZoneSet::new()
            }
        }
    }
}
