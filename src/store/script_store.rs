//! The script collection and its JSON mirror on disk.
//!
//! Every mutation rewrites the whole file. The in-memory collection is
//! authoritative: a failed write is reported to the caller but the change
//! it was meant to persist is kept.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::language::Language;
use crate::model::script::{Script, ScriptId, ScriptRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Code,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("Name"),
            Self::Code => f.write_str("Code"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} must not be empty")]
    InvalidInput(Field),
    #[error("Script {0} no longer exists")]
    NotFound(ScriptId),
    #[error("Cannot access {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed script file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. } | Self::Malformed { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// What `load` found. Loading never fails outright; a broken file is
/// reported here and the current collection is left alone.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(usize),
    Missing,
    Failed(Error),
}

#[derive(Debug)]
pub struct ScriptStore {
    path: PathBuf,
    records: Vec<ScriptRecord>,
}

impl ScriptStore {
    /// Store seeded with the default scripts. Does not touch the disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_scripts(path, Script::seeds())
    }

    pub fn with_scripts(path: impl Into<PathBuf>, scripts: Vec<Script>) -> Self {
        Self {
            path: path.into(),
            records: scripts.into_iter().map(ScriptRecord::new).collect(),
        }
    }

    /// Seeded store with the durable file, if any, loaded over the seeds.
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadOutcome) {
        let mut store = Self::new(path);
        let outcome = store.load();
        (store, outcome)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> &[ScriptRecord] {
        &self.records
    }

    pub fn get(&self, id: ScriptId) -> Option<&ScriptRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn create(&mut self, name: &str, language: Language, code: &str) -> Result<ScriptRecord> {
        let script = validate(name, language, code)?;
        let record = ScriptRecord::new(script);
        self.records.push(record.clone());
        self.save()?;
        Ok(record)
    }

    pub fn update(
        &mut self,
        id: ScriptId,
        name: &str,
        language: Language,
        code: &str,
    ) -> Result<ScriptRecord> {
        let idx = self.position(id)?;
        let script = validate(name, language, code)?;
        self.records[idx].script = script;
        let record = self.records[idx].clone();
        self.save()?;
        Ok(record)
    }

    pub fn delete(&mut self, id: ScriptId) -> Result<ScriptRecord> {
        let idx = self.position(id)?;
        let record = self.records.remove(idx);
        self.save()?;
        Ok(record)
    }

    /// Replace the collection with the durable file's contents if it
    /// exists and parses. Fresh ids are assigned to every loaded record.
    pub fn load(&mut self) -> LoadOutcome {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no script file, keeping current scripts");
                return LoadOutcome::Missing;
            }
            Err(source) => {
                let err = Error::Persistence {
                    path: self.path.clone(),
                    source,
                };
                tracing::warn!("{err}");
                return LoadOutcome::Failed(err);
            }
        };

        match serde_json::from_str::<Vec<Script>>(&data) {
            Ok(scripts) => {
                let count = scripts.len();
                self.records = scripts.into_iter().map(ScriptRecord::new).collect();
                tracing::info!(path = %self.path.display(), count, "loaded scripts");
                LoadOutcome::Loaded(count)
            }
            Err(source) => {
                let err = Error::Malformed {
                    path: self.path.clone(),
                    source,
                };
                tracing::warn!("{err}");
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Overwrite the durable file with the current collection.
    pub fn save(&self) -> Result<()> {
        let scripts: Vec<&Script> = self.records.iter().map(|r| &r.script).collect();
        let data = serde_json::to_string_pretty(&scripts).map_err(|source| Error::Malformed {
            path: self.path.clone(),
            source,
        })?;

        let write = || -> io::Result<()> {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, data)
        };

        match write() {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), count = scripts.len(), "saved scripts");
                Ok(())
            }
            Err(source) => {
                let err = Error::Persistence {
                    path: self.path.clone(),
                    source,
                };
                tracing::warn!("{err}");
                Err(err)
            }
        }
    }

    fn position(&self, id: ScriptId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::NotFound(id))
    }
}

fn validate(name: &str, language: Language, code: &str) -> Result<Script> {
    let name = name.trim();
    let code = code.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput(Field::Name));
    }
    if code.is_empty() {
        return Err(Error::InvalidInput(Field::Code));
    }
    Ok(Script::new(name, language, code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn empty(path: impl Into<PathBuf>) -> ScriptStore {
        ScriptStore::with_scripts(path, Vec::new())
    }

    fn scripts(store: &ScriptStore) -> Vec<Script> {
        store.list().iter().map(|r| r.script.clone()).collect()
    }

    fn temp_store() -> (TempDir, ScriptStore) {
        let dir = TempDir::new().unwrap();
        let store = empty(dir.path().join("scripts.json"));
        (dir, store)
    }

    #[test]
    fn test_create_appends_trimmed() {
        let (_dir, mut store) = temp_store();
        store.create("first", Language::Bash, "ls").unwrap();
        let rec = store
            .create("  Greet \n", Language::Javascript, "\tconsole.log(1)  ")
            .unwrap();

        assert_eq!(store.len(), 2);
        let last = store.list().last().unwrap();
        assert_eq!(last, &rec);
        assert_eq!(last.script.name, "Greet");
        assert_eq!(last.script.code, "console.log(1)");
        assert_eq!(last.script.language, Language::Javascript);
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        let (dir, mut store) = temp_store();
        for (name, code) in [("", "x"), ("   ", "x"), ("n", ""), ("n", " \n\t "), ("", "")] {
            let err = store.create(name, Language::Python, code).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{name:?} {code:?}");
        }
        assert_eq!(store.len(), 0);
        assert!(!dir.path().join("scripts.json").exists());
    }

    #[test]
    fn test_blank_name_reported_before_code() {
        let (_dir, mut store) = temp_store();
        let err = store.create(" ", Language::Python, "").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(Field::Name)));
        assert_eq!(err.to_string(), "Name must not be empty");
    }

    #[test]
    fn test_update_replaces_only_target() {
        let (_dir, mut store) = temp_store();
        let a = store.create("a", Language::Python, "1").unwrap();
        let b = store.create("b", Language::Ruby, "2").unwrap();
        let c = store.create("c", Language::Bash, "3").unwrap();

        let updated = store.update(b.id, "B", Language::Javascript, "two").unwrap();
        assert_eq!(updated.id, b.id);

        assert_eq!(store.list()[0], a);
        assert_eq!(store.list()[1].id, b.id);
        assert_eq!(
            store.list()[1].script,
            Script::new("B", Language::Javascript, "two")
        );
        assert_eq!(store.list()[2], c);
    }

    #[test]
    fn test_update_rejects_blank_fields() {
        let (_dir, mut store) = temp_store();
        let a = store.create("a", Language::Python, "1").unwrap();
        let err = store.update(a.id, "a", Language::Python, "   ").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(Field::Code)));
        assert_eq!(store.list()[0], a);
    }

    #[test]
    fn test_update_unknown_id() {
        let (_dir, mut store) = temp_store();
        store.create("a", Language::Python, "1").unwrap();
        let before = store.list().to_vec();
        let ghost = ScriptId::generate();

        let err = store.update(ghost, "x", Language::Python, "y").unwrap_err();
        assert!(matches!(err, Error::NotFound(id) if id == ghost));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_delete() {
        let (_dir, mut store) = temp_store();
        let a = store.create("a", Language::Python, "1").unwrap();
        let b = store.create("b", Language::Python, "2").unwrap();

        let removed = store.delete(a.id).unwrap();
        assert_eq!(removed, a);
        assert_eq!(store.list(), &[b]);
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection() {
        let (_dir, mut store) = temp_store();
        let a = store.create("a", Language::Python, "1").unwrap();
        store.delete(a.id).unwrap();
        let b = store.create("b", Language::Python, "2").unwrap();

        let err = store.delete(a.id).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(store.list(), &[b]);
    }

    #[test]
    fn test_same_names_are_distinct_records() {
        let (_dir, mut store) = temp_store();
        let first = store.create("dup", Language::Python, "1").unwrap();
        let second = store.create("dup", Language::Python, "2").unwrap();

        store.delete(second.id).unwrap();
        assert_eq!(store.list(), &[first]);
    }

    #[test]
    fn test_edit_scenario() {
        let (_dir, mut store) = temp_store();
        let hello = store.create("Hello", Language::Python, "print(1)").unwrap();
        let greet = store
            .create("Greet", Language::Javascript, "console.log(1)")
            .unwrap();
        store
            .update(hello.id, "Hi", Language::Python, "print(2)")
            .unwrap();

        let list = store.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].script, Script::new("Hi", Language::Python, "print(2)"));
        assert_eq!(list[1], greet);
    }

    #[test]
    fn test_mutations_persist() {
        let (dir, mut store) = temp_store();
        let path = dir.path().join("scripts.json");
        let a = store.create("a", Language::Python, "1").unwrap();

        let (reloaded, _) = ScriptStore::open(&path);
        assert_eq!(scripts(&reloaded), vec![a.script.clone()]);

        store.delete(a.id).unwrap();
        let (reloaded, outcome) = ScriptStore::open(&path);
        assert!(matches!(outcome, LoadOutcome::Loaded(0)));
        assert_eq!(reloaded.len(), 0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scripts.json");
        let original = vec![
            Script::new("Hello World", Language::Python, "print(\"hi\")"),
            Script::new("Loop", Language::Bash, "for i in 1 2 3; do\n  echo $i\ndone"),
            Script::new("Unicode ✓", Language::Other("elixir".into()), "IO.puts \"ü\""),
            Script::new("Hello World", Language::Ruby, "puts 'hi'"),
        ];
        let store = ScriptStore::with_scripts(&path, original.clone());
        store.save().unwrap();

        let mut fresh = empty(&path);
        let outcome = fresh.load();
        assert!(matches!(outcome, LoadOutcome::Loaded(4)));
        assert_eq!(scripts(&fresh), original);
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scripts.json");
        let store = ScriptStore::with_scripts(
            &path,
            vec![Script::new("Test", Language::Python, "print(i)")],
        );
        store.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let expected = "[\n  {\n    \"name\": \"Test\",\n    \"code\": \"print(i)\",\n    \"language\": \"python\"\n  }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_reads_hand_written_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scripts.json");
        fs::write(
            &path,
            r#"[{"name": "Hello World", "code": "print(\"hi\")", "language": "python"},
                {"language": "go", "name": "Test", "code": "for i in range(5):\n    print(i)"}]"#,
        )
        .unwrap();

        let (store, outcome) = ScriptStore::open(&path);
        assert!(matches!(outcome, LoadOutcome::Loaded(2)));
        assert_eq!(store.list()[1].script.language, Language::Other("go".into()));
        assert_eq!(store.list()[1].script.code, "for i in range(5):\n    print(i)");
    }

    #[test]
    fn test_load_twice_is_stable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scripts.json");
        ScriptStore::new(&path).save().unwrap();

        let mut store = empty(&path);
        store.load();
        let first = scripts(&store);
        store.load();
        assert_eq!(scripts(&store), first);
        assert_eq!(first, Script::seeds());
    }

    #[test]
    fn test_load_missing_file_keeps_seeds() {
        let dir = TempDir::new().unwrap();
        let (store, outcome) = ScriptStore::open(dir.path().join("nope.json"));
        assert!(matches!(outcome, LoadOutcome::Missing));
        assert_eq!(scripts(&store), Script::seeds());
    }

    #[test]
    fn test_load_malformed_file_keeps_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scripts.json");
        let mut store = empty(&path);
        store.create("keep", Language::Ruby, "puts 1").unwrap();
        let before = store.list().to_vec();

        for junk in ["{not json", "{\"name\": \"x\"}", "[{\"name\": \"x\"}]", ""] {
            fs::write(&path, junk).unwrap();
            let outcome = store.load();
            assert!(
                matches!(outcome, LoadOutcome::Failed(Error::Malformed { .. })),
                "{junk:?}"
            );
            assert_eq!(store.list(), before.as_slice());
        }
    }

    #[test]
    fn test_load_unreadable_path_keeps_state() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be read as a file.
        let (store, outcome) = ScriptStore::open(dir.path());
        match outcome {
            LoadOutcome::Failed(err) => assert!(err.is_persistence()),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(scripts(&store), Script::seeds());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("scripts.json");
        ScriptStore::new(&path).save().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_keeps_change_in_memory() {
        let dir = TempDir::new().unwrap();
        let mut store = empty(dir.path());

        let err = store.create("a", Language::Python, "1").unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].script.name, "a");
    }
}
