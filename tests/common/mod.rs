use assert_cmd::Command;
use std::ffi::OsStr;
use std::fs;
use tempfile::TempDir;

/// A scratch directory holding fixture files; commands run inside it so the
/// filename echoed in the output is the relative name.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn write(&self, name: impl AsRef<OsStr>, contents: impl AsRef<[u8]>) -> &Self {
        fs::write(self.dir.path().join(name.as_ref()), contents).unwrap();
        self
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wc_analogue"));
        cmd.current_dir(self.dir.path())
            .env_remove("WC_ANALOGUE_STRICT")
            .env_remove("WC_ANALOGUE_LENIENT_CLUSTERS")
            .env_remove("WC_ANALOGUE_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}
