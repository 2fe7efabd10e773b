// Async loading to run in main before the batch computation starts

use anyhow::Result;

use crate::Cli;
use crate::config::SUBJECT_CACHE_VERSION;
use crate::data::cache_version::{CacheVersion, check_local_cache_validity};
use crate::data::json_version::JsonVersion;
use crate::data::{LoadSubjectData, SubjectCollection, get_subject_data_async};

/// Pick the dataset source order and load.
///
/// If the local cache is invalid the JSON dump is the only choice; otherwise
/// both sources are available and we prioritize whichever the user asked for
/// (`--prefer-json` skips the cache).
pub async fn fetch_subject_data(args: &Cli) -> Result<(SubjectCollection, &'static str)> {
    let json_source = || -> Box<dyn LoadSubjectData> {
        Box::new(JsonVersion {
            path: args.dataset.clone(),
        })
    };

    let sources: Vec<Box<dyn LoadSubjectData>> = match (
        args.prefer_json,
        check_local_cache_validity(SUBJECT_CACHE_VERSION),
    ) {
        (false, Ok(_)) => vec![Box::new(CacheVersion), json_source()], // cache first
        (true, Ok(_)) => vec![json_source(), Box::new(CacheVersion)], // dump first
        (_, Err(e)) => {
            log::info!("No usable local cache ({:#}), reading the JSON dump", e);
            vec![json_source()] // dump only
        }
    };

    let (collection, signature) = get_subject_data_async(&sources).await?;
    log::info!("Retrieved subject data using: {}.", signature);
    Ok((collection, signature))
}
