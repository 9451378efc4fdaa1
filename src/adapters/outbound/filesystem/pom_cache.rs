use crate::maven_resolution::domain::repository::pom_cache_path;
use crate::maven_resolution::domain::ArtifactRef;
use crate::ports::outbound::PomCache;
use crate::shared::error::ResolveError;
use crate::shared::security::{validate_not_symlink, validate_regular_file, MAX_POM_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// DiskPomCache adapter storing POMs in Maven repository layout
///
/// `{root}/org/example/lib/1.0/lib-1.0.pom`, the same tree a local
/// `~/.m2/repository` uses, so an existing local repository can serve as
/// a read-only cache.
pub struct DiskPomCache {
    root: PathBuf,
}

impl DiskPomCache {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PomCache for DiskPomCache {
    fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| ResolveError::FileWriteError {
            path: self.root.clone(),
            details: format!("Failed to create POM cache directory: {}", e),
        })?;
        Ok(())
    }

    fn locate(&self, artifact: ArtifactRef<'_>) -> Result<PathBuf> {
        pom_cache_path(&self.root, artifact)
    }

    fn load(&self, artifact: ArtifactRef<'_>) -> Result<Option<String>> {
        let path = self.locate(artifact)?;

        match fs::symlink_metadata(&path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ResolveError::FileReadError {
                    path,
                    details: e.to_string(),
                }
                .into())
            }
            Ok(_) => {}
        }

        validate_regular_file(&path, "cached POM", MAX_POM_FILE_SIZE)?;

        let content = fs::read_to_string(&path).map_err(|e| ResolveError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(Some(content))
    }

    fn store(&self, artifact: ArtifactRef<'_>, content: &str) -> Result<PathBuf> {
        let path = self.locate(artifact)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ResolveError::FileWriteError {
                path: path.clone(),
                details: format!("Failed to create directory {}: {}", parent.display(), e),
            })?;
        }

        if fs::symlink_metadata(&path).is_ok() {
            validate_not_symlink(&path, "write")?;
        }

        fs::write(&path, content).map_err(|e| ResolveError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(path)
    }
}
