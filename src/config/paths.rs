use directories::ProjectDirs;
use std::path::PathBuf;

const SCRIPTS_FILE: &str = "scripts.json";

pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ScriptRunner").map(|d| d.config_dir().to_path_buf())
}

/// The durable script file lives in the working directory.
pub fn scripts_file() -> PathBuf {
    PathBuf::from(SCRIPTS_FILE)
}
