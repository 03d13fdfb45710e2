use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// JsonConnection manages the data directory holding the budget file
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory.
    /// Honors the KIDS_BUDGET_DATA_DIR override, otherwise uses
    /// ~/Documents/Kids Budget Tool.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("KIDS_BUDGET_DATA_DIR") {
            info!("Using data directory from KIDS_BUDGET_DATA_DIR: {}", dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Kids Budget Tool");
        info!("Using default data directory: {}", data_dir.display());

        Self::new(data_dir)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the path of the file holding the budget record array
    pub fn budgets_file_path(&self) -> PathBuf {
        self.base_directory.join("budgets.json")
    }
}
