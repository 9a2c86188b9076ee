use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    domain::{AddressBook, Config},
    storage::{JsonAddressBook, PersistError},
};

/// Errors raised when loading or saving the contact book.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The data file could not be read or written.
    #[error("Could not access the data file: {0}")]
    Io(#[from] io::Error),

    /// The data file is not valid JSON, or not shaped like a contact book.
    #[error("The data file is not in the correct format: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored record could not be turned back into a contact.
    #[error(transparent)]
    Record(#[from] PersistError),
}

/// A contact book kept in a root directory.
///
/// The root holds the optional `.contacts/config.toml` and, unless configured
/// otherwise, the `contacts.json` data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    root: PathBuf,
    config: Config,
}

impl Store {
    /// Opens the store rooted at `root`.
    ///
    /// The configuration is read from `.contacts/config.toml`. If it is
    /// missing or cannot be read, the default configuration is used.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        let config = load_config(&root);
        Self { root, config }
    }

    /// Opens the store rooted at `root` with an explicit configuration.
    #[must_use]
    pub const fn with_config(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// The location of the configuration file for a store rooted at `root`.
    #[must_use]
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(".contacts").join("config.toml")
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The resolved location of the data file.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.root.join(self.config.data_file())
    }

    /// Reads the contact book from the data file.
    ///
    /// A missing data file is an empty book.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds a record that fails validation. Invalid records are skipped
    /// instead when the configuration sets `skip_invalid`.
    pub fn load(&self) -> Result<AddressBook, StoreError> {
        let path = self.data_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", path.display());
                return Ok(AddressBook::default());
            }
            Err(e) => return Err(e.into()),
        };

        let json: JsonAddressBook = serde_json::from_str(&content)?;
        let book = json.into_address_book(self.config.skip_invalid)?;
        info!(count = book.len(), "Loaded contacts from {}", path.display());
        Ok(book)
    }

    /// Writes every record in `book` to the data file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file or its parent directories cannot be
    /// written.
    pub fn save(&self, book: &AddressBook) -> Result<(), StoreError> {
        let path = self.data_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&JsonAddressBook::from(book))?;
        fs::write(&path, content)?;
        debug!(count = book.len(), "Saved contacts to {}", path.display());
        Ok(())
    }
}

fn load_config(root: &Path) -> Config {
    let path = Store::config_path(root);
    Config::load(&path).unwrap_or_else(|e| {
        debug!("Failed to load config: {e}");
        Config::default()
    })
}
