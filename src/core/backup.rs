use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::store::JsonStore;
use crate::store::log::hrlog;
use crate::ui::messages::{success, warning};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest_file`, optionally compressing it.
    ///
    /// Returns the path of the file actually written.
    pub fn backup(
        store: &mut JsonStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        if !dest.is_absolute() {
            return Err(AppError::InvalidRequest(format!(
                "Backup path must be absolute: {dest_file}"
            )));
        }

        // 1️⃣ Make sure the data file exists on disk
        if !store.path().exists() {
            store.save()?;
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(dest, force)?;

        // 3️⃣ Copy data file
        fs::copy(store.path(), dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 4️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if compressed != dest {
                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {e}"));
                }
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        // 5️⃣ Activity log
        hrlog(
            store,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Compress a backup: zip on Windows, tar.gz everywhere else.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let out = if cfg!(target_os = "windows") {
        compress_zip(path)?
    } else {
        compress_tar_gz(path)?
    };
    success(format!("📦 Compressed: {}", out.display()));
    Ok(out)
}

fn file_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::InvalidRequest(format!("invalid backup path {}", path.display())))
}

fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(file_name(path)?, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}

fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let gz_path = PathBuf::from(format!("{}.tar.gz", path.display()));
    let file = fs::File::create(&gz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());

    let mut archive = tar::Builder::new(encoder);
    archive.append_path_with_name(path, file_name(path)?)?;
    archive.into_inner()?.finish()?;

    Ok(gz_path)
}
