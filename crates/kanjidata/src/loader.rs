//! Loads the reference dictionary from the cache, or fetches KANJIDIC2 and caches it.

use crate::{
    cache::{self, CachePaths},
    dictionary::ReferenceDictionary,
    kanjidic2::Kanjidic2,
};
use eyre::WrapErr;
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use std::{
    io::{BufReader, Read},
    time::Duration,
};

pub const KANJIDIC2_URL: &str = "http://www.edrdg.org/kanjidic/kanjidic2.xml.gz";
pub const LICENSE_URL: &str = "http://www.edrdg.org/edrdg/licence.html";

/// Returns the cached dictionary if there is one.
/// Otherwise, or if `refresh` is set, fetches KANJIDIC2 and writes the cache.
pub fn load(paths: &CachePaths, refresh: bool) -> eyre::Result<ReferenceDictionary> {
    load_from(paths, refresh, KANJIDIC2_URL, LICENSE_URL)
}

fn load_from(
    paths: &CachePaths,
    refresh: bool,
    kanjidic2_url: &str,
    license_url: &str,
) -> eyre::Result<ReferenceDictionary> {
    if !refresh && paths.dictionary.is_file() {
        tracing::info!("loading kanji data from {}", paths.dictionary.display());
        return cache::read(&paths.dictionary);
    }

    tracing::info!("fetching kanji data");
    // no timeout, a slow download just blocks the run
    let client = Client::builder()
        .timeout(None::<Duration>)
        .build()
        .wrap_err("Failed to build HTTP client")?;
    let dictionary = fetch_dictionary(&client, kanjidic2_url)?;
    // the license is not essential, so we carry on without it
    match fetch_text(&client, license_url) {
        Ok(license) => cache::write_license(&paths.license, &license)?,
        Err(err) => tracing::warn!("failed to fetch the KANJIDIC2 license: {err:#}"),
    }
    cache::write(&paths.dictionary, &dictionary)?;
    tracing::info!("cached kanji data at {}", paths.dictionary.display());
    Ok(dictionary)
}

fn fetch_dictionary(client: &Client, url: &str) -> eyre::Result<ReferenceDictionary> {
    let res = client
        .get(url)
        .send()
        .and_then(|res| res.error_for_status())
        .wrap_err_with(|| format!("Failed to fetch '{url}'"))?;
    from_gzipped_xml(res).wrap_err("Failed to parse KANJIDIC2")
}

fn fetch_text(client: &Client, url: &str) -> eyre::Result<String> {
    let text = client
        .get(url)
        .send()
        .and_then(|res| res.error_for_status())
        .and_then(|res| res.text())
        .wrap_err_with(|| format!("Failed to fetch '{url}'"))?;
    Ok(text)
}

/// Decompresses and parses a gzipped KANJIDIC2 document.
pub fn from_gzipped_xml<R: Read>(r: R) -> eyre::Result<ReferenceDictionary> {
    let kd2 = Kanjidic2::from_reader(BufReader::new(GzDecoder::new(r)))?;
    Ok(ReferenceDictionary::from_kanjidic2(&kd2))
}
