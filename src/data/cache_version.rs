use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SERDE;
use crate::config::{SUBJECT_CACHE_PATH, SUBJECT_CACHE_VERSION, subject_cache_filename};
use crate::data::{LoadSubjectData, SubjectCollection};

/// Serialized cache wrapper for the subject dataset.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheFile {
    pub version: f64,
    pub timestamp_ms: i64,
    pub data: SubjectCollection,
}

impl CacheFile {
    pub fn new(data: SubjectCollection, version: f64) -> Self {
        Self {
            version,
            timestamp_ms: Utc::now().timestamp_millis(),
            data,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open cache file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let cache = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize cache: {:?}", path))?;
        Ok(cache)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize cache to: {}", path.display()))
    }

    pub fn default_cache_path() -> PathBuf {
        PathBuf::from(SUBJECT_CACHE_PATH).join(subject_cache_filename())
    }
}

/// Check whether a usable cache exists before putting it in the source chain.
/// The dataset is static, so validity is a pure format-version check.
pub fn check_local_cache_validity(version_required: f64) -> Result<()> {
    let full_path = CacheFile::default_cache_path();

    #[cfg(debug_assertions)]
    if PRINT_SERDE {
        log::info!("Checking validity of local cache at {:?}...", full_path);
    }
    let cache = CacheFile::load_from_path(&full_path)?;

    if cache.version != version_required {
        bail!(
            "Cache version mismatch: file v{} vs required v{}",
            cache.version,
            version_required
        );
    }

    Ok(())
}

/// Write the subject dataset to the binary cache file
pub fn write_subject_data_locally(
    source_signature: &'static str,
    collection: &SubjectCollection,
) -> Result<()> {
    if source_signature != "JSON dump" {
        #[cfg(debug_assertions)]
        if PRINT_SERDE {
            log::info!("Skipping cache write (data came from the cache already)");
        }
        return Ok(());
    }

    let full_path = CacheFile::default_cache_path();

    #[cfg(debug_assertions)]
    let start_time = PRINT_SERDE.then(|| {
        log::info!("Writing cache to disk: {:?}...", full_path);
        std::time::Instant::now()
    });

    let cache = CacheFile::new(collection.clone(), SUBJECT_CACHE_VERSION);
    cache.save_to_path(&full_path)?;

    #[cfg(debug_assertions)]
    if let Some(start) = start_time {
        let elapsed = start.elapsed();
        let file_size = std::fs::metadata(&full_path)?.len();
        log::info!(
            "Cache written: {:?} ({:.1} MB in {:.2}s)",
            full_path,
            file_size as f64 / 1_048_576.0,
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}

/// Async wrapper for `write_subject_data_locally`
/// Spawns a blocking task so the serialization never stalls the runtime
pub async fn write_subject_data_async(
    source_signature: &'static str,
    collection: SubjectCollection,
) -> Result<()> {
    tokio::task::spawn_blocking(move || write_subject_data_locally(source_signature, &collection))
        .await
        .context("Cache write task panicked")?
}

pub struct CacheVersion;

#[async_trait]
impl LoadSubjectData for CacheVersion {
    fn signature(&self) -> &'static str {
        "Local Cache"
    }

    async fn load_subject_data(&self) -> Result<SubjectCollection> {
        let full_path = CacheFile::default_cache_path();

        #[cfg(debug_assertions)]
        let start_time = PRINT_SERDE.then(|| {
            log::info!("Reading cache from: {:?}...", full_path);
            std::time::Instant::now()
        });

        let cache = tokio::task::spawn_blocking(move || CacheFile::load_from_path(&full_path))
            .await
            .context("Deserialization task panicked")?
            .context("Failed to load cache file")?;

        #[cfg(debug_assertions)]
        if let Some(start) = start_time {
            log::info!(
                "Cache loaded: {} subjects in {:.2}s",
                cache.data.subjects.len(),
                start.elapsed().as_secs_f64()
            );
        }

        Ok(cache.data)
    }
}
