//! Resource folder management.
//!
//! A resource folder holds the generated `.tex` sources, the renderer's
//! auxiliary files and artifacts, and an `images/` subfolder with copies of
//! every embedded image.

use crate::error::{Error, Result};
use crate::model::Image;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the image subfolder.
pub const IMAGES_DIR: &str = "images";

/// Extension of generated markup files.
pub const SOURCE_EXTENSION: &str = "tex";

/// Extension of rendered artifacts.
pub const ARTIFACT_EXTENSION: &str = "pdf";

/// The on-disk working folder of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFolder {
    root: PathBuf,
    images: PathBuf,
}

impl ResourceFolder {
    /// Create the folder and its image subfolder if they do not exist.
    ///
    /// Fails with [`Error::Configuration`] when the absolute path contains a
    /// space; LaTeX engines do not handle those reliably. Nothing is created
    /// in that case.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        if absolute.to_string_lossy().contains(' ') {
            return Err(Error::Configuration(format!(
                "folder path must not contain spaces: {}",
                absolute.display()
            )));
        }

        let images = absolute.join(IMAGES_DIR);
        fs::create_dir_all(&images)?;

        let root = dunce::canonicalize(&absolute)?;
        let images = root.join(IMAGES_DIR);
        log::debug!("Resource folder ready at {}", root.display());

        Ok(Self { root, images })
    }

    /// Root folder (absolute).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Image subfolder (absolute).
    pub fn images(&self) -> &Path {
        &self.images
    }

    /// Image folder as used by `\graphicspath`: forward slashes and a
    /// trailing separator.
    pub fn graphics_path(&self) -> String {
        let mut path = self.images.to_string_lossy().replace('\\', "/");
        if !path.ends_with('/') {
            path.push('/');
        }
        path
    }

    /// Path of the markup file for an output name.
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, SOURCE_EXTENSION))
    }

    /// Path of the rendered artifact for an output name.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, ARTIFACT_EXTENSION))
    }

    /// Copy an image into the image subfolder, replacing any file of the
    /// same name. Returns the destination path.
    pub fn copy_image(&self, image: &Image) -> Result<PathBuf> {
        let file_name = image.file_name().ok_or_else(|| Error::ResourceCopy {
            path: image.source.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        })?;

        let destination = self.images.join(file_name);
        fs::copy(&image.source, &destination).map_err(|source| Error::ResourceCopy {
            path: image.source.clone(),
            source,
        })?;

        log::debug!(
            "Copied image {} to {}",
            image.source.display(),
            destination.display()
        );
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("doc");

        let first = ResourceFolder::create(&target).unwrap();
        let second = ResourceFolder::create(&target).unwrap();

        assert_eq!(first, second);
        assert!(first.images().is_dir());
        assert!(first.root().is_absolute());
    }

    #[test]
    fn test_space_in_path_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("my doc");

        let result = ResourceFolder::create(&target);
        assert!(matches!(result, Err(Error::Configuration(_))));
        assert!(!target.exists());
    }

    #[test]
    fn test_graphics_path_uses_forward_slashes() {
        let temp = tempfile::tempdir().unwrap();
        let folder = ResourceFolder::create(temp.path()).unwrap();

        let path = folder.graphics_path();
        assert!(path.ends_with("images/"));
        assert!(!path.contains('\\'));
    }

    #[test]
    fn test_output_paths() {
        let temp = tempfile::tempdir().unwrap();
        let folder = ResourceFolder::create(temp.path()).unwrap();

        assert_eq!(folder.source_path("report"), folder.root().join("report.tex"));
        assert_eq!(folder.artifact_path("report"), folder.root().join("report.pdf"));
    }

    #[test]
    fn test_copy_image_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let folder = ResourceFolder::create(temp.path().join("out")).unwrap();

        let source = temp.path().join("logo.png");
        fs::write(&source, b"first").unwrap();
        folder.copy_image(&Image::new(&source)).unwrap();

        fs::write(&source, b"second").unwrap();
        let destination = folder.copy_image(&Image::new(&source)).unwrap();

        assert_eq!(destination, folder.images().join("logo.png"));
        assert_eq!(fs::read(&destination).unwrap(), b"second");
    }

    #[test]
    fn test_copy_missing_image() {
        let temp = tempfile::tempdir().unwrap();
        let folder = ResourceFolder::create(temp.path()).unwrap();

        let result = folder.copy_image(&Image::new(temp.path().join("missing.png")));
        assert!(matches!(result, Err(Error::ResourceCopy { .. })));
    }
}
