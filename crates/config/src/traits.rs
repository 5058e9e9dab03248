use std::path::Path;

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use xshell::Shell;

/// Marker for configs that live as JSON files on disk.
pub trait FileConfigTrait: Serialize + DeserializeOwned {}

pub trait SaveConfig {
    fn save(&self, shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<()>;
}

pub trait ReadConfig: Sized {
    fn read(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self>;
}

impl<T: FileConfigTrait> SaveConfig for T {
    fn save(&self, shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            shell.create_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        shell
            .write_file(path, json)
            .with_context(|| format!("writing {}", path.display()))
    }
}

impl<T: FileConfigTrait> ReadConfig for T {
    fn read(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = shell
            .read_file(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }
}
