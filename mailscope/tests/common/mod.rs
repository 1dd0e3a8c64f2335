use assert_cmd::assert::Assert;
use assert_cmd::Command;
use assert_fs::prelude::PathCopy;
use assert_fs::TempDir;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

fn setup_working_dir(dir_name: &str) -> TempDir {
    let file_path = PathBuf::from(format!(
        "{}/tests/test-cases/{}",
        env!("CARGO_MANIFEST_DIR"),
        dir_name
    ));

    let temp = TempDir::new().unwrap();
    temp.copy_from(file_path, &["*", "**/*"]).unwrap();

    temp
}

pub struct MailscopeTestHelper<'a> {
    pub work_dir: TempDir,
    name: &'a str,
    counter: AtomicUsize,
}

impl<'a> MailscopeTestHelper<'a> {
    pub fn new(name: &'a str, test_dir: &'a str) -> Self {
        Self {
            work_dir: setup_working_dir(test_dir),
            name,
            counter: AtomicUsize::new(0),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("mailscope").unwrap();
        cmd.current_dir(self.work_dir.path())
            .env(
                "MAILSCOPE_RUN_ID",
                format!(
                    "{}-{}",
                    self.name,
                    self.counter.fetch_add(1, Ordering::Relaxed)
                ),
            )
            .env_remove("MAILSCOPE_OUTPUT_DIR")
            .env_remove("MAILSCOPE_OUTPUT_PREFIX")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn run_command(&self, args: &[&str]) -> Assert {
        self.command().args(args).assert()
    }

    /// Runs with `stdin` piped in, which is what answers the path prompt when no file is given.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Assert {
        self.command()
            .args(args)
            .write_stdin(stdin.to_string())
            .assert()
    }

    pub fn analyze(&self, file: &str) -> Assert {
        self.run_command(&["analyze", file])
    }

    /// Every `.json` file directly inside `dir`, relative to the working dir.
    pub fn analysis_files_in(&self, dir: &str) -> Vec<PathBuf> {
        let dir = self.work_dir.path().join(dir);
        if !dir.exists() {
            return Vec::new();
        }

        let mut found: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        found.sort();
        found
    }

    pub fn analysis_files(&self) -> Vec<PathBuf> {
        self.analysis_files_in(".")
    }

    pub fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    pub fn clean_work_dir(self) {
        self.work_dir.close().unwrap();
    }
}
