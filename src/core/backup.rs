use crate::config::Config;
use crate::db::log::whlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::absolute_output_path;
use rusqlite::Connection;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct BackupLogic;

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = absolute_output_path(dest_file)?;

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        if dest.exists() && !confirm_overwrite(&dest)? {
            info("Backup cancelled by user.");
            return Ok(dest);
        }

        // 4️⃣ Copy database
        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest)?;

            if compressed != dest {
                if let Err(e) = fs::remove_file(&dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                } else {
                    info(format!("Removed uncompressed backup: {}", dest.display()));
                }
            }

            compressed
        } else {
            dest.clone()
        };

        // 6️⃣ Log in DB
        if let Ok(conn) = Connection::open(src) {
            whlog_quiet(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(final_path)
    }
}

fn file_name_of(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))
}

/// Compress a backup: .zip on Windows, .tar.gz elsewhere
#[cfg(target_os = "windows")]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(file_name_of(path)?, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}

#[cfg(not(target_os = "windows"))]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let name = file_name_of(path)?;
    let gz_path = path.with_file_name(format!("{}.tar.gz", name));

    let file = fs::File::create(&gz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(encoder);

    tar.append_path_with_name(path, &name)?;
    tar.into_inner()?.finish()?;

    info(format!("Compressed: {}", gz_path.display()));

    Ok(gz_path)
}
