pub mod fixtures {
    use crate::FimContext;
    use anyhow::Result;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// A fim root plus a workspace for tracked files, both inside one temp dir.
    pub struct TestMonitor {
        pub temp_dir: TempDir,
        pub context: FimContext,
        pub list_path: PathBuf,
    }

    impl TestMonitor {
        pub fn new() -> Result<Self> {
            let temp_dir = tempfile::tempdir()?;
            let root = temp_dir.path().join(".fim");
            let mut context = FimContext::new_explicit(root)?;
            context.home = Some(temp_dir.path().to_path_buf());

            let list_path = temp_dir.path().join("watch.txt");
            fs::write(&list_path, "# test list\n")?;

            Ok(Self {
                temp_dir,
                context,
                list_path,
            })
        }

        pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
            let path = self.temp_dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
            Ok(path)
        }

        /// Create `name` and append its absolute path to the list.
        pub fn track(&self, name: &str, content: &str) -> Result<String> {
            let path = self.create_file(name, content)?;
            let entry = path.to_string_lossy().into_owned();
            crate::tracking::PathList::new(&self.list_path).add(&entry)?;
            Ok(entry)
        }
    }
}
