//! Query service: source selection plus filtering
//!
//! Decides where a marker query is served from. Live India queries go
//! cache-first, falling back to a fresh fetch with cache write-through.
//! Everything else is served from the static dataset. A live fetch
//! failure degrades to an empty result; it never silently swaps in static
//! data and never touches the cache.

use crate::core::cache::CacheStore;
use crate::core::dataset::StaticDataset;
use crate::core::normalize::{MarkerPipeline, Scope};
use crate::core::query::filter::{filter_markers, CityMatch};
use crate::domain::marker::Marker;

/// Parameters of one marker query
///
/// `None` filter values mean "All". `live` requests the live data path,
/// which only applies when the country filter is India; `refresh` forces
/// a fetch even when a cached snapshot exists.
#[derive(Debug, Clone, Default)]
pub struct MarkerQuery {
    pub continent: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub live: bool,
    pub refresh: bool,
}

/// Serves marker queries over the static dataset, the cache, and the live
/// pipeline
pub struct QueryService<'a> {
    dataset: &'a StaticDataset,
    cache: &'a CacheStore,
    pipeline: &'a MarkerPipeline,
}

impl<'a> QueryService<'a> {
    pub fn new(
        dataset: &'a StaticDataset,
        cache: &'a CacheStore,
        pipeline: &'a MarkerPipeline,
    ) -> Self {
        Self {
            dataset,
            cache,
            pipeline,
        }
    }

    /// Run a marker query
    ///
    /// The live path applies only the city filter, by substring; the
    /// static path applies all filters with exact city matching.
    pub async fn markers(&self, query: &MarkerQuery) -> Vec<Marker> {
        if query.live && query.country.as_deref() == Some("India") {
            let live = self.live_india_markers(query.refresh).await;
            return filter_markers(
                &live,
                None,
                None,
                query.city.as_deref(),
                CityMatch::Substring,
            );
        }

        filter_markers(
            self.dataset.markers(),
            query.continent.as_deref(),
            query.country.as_deref(),
            query.city.as_deref(),
            CityMatch::Exact,
        )
    }

    /// Live India markers, cache-first
    ///
    /// On a cache miss (or forced refresh) the pipeline runs and a
    /// successful result, including an empty one, is written through to
    /// the cache. A failed fetch leaves the cache untouched and yields an
    /// empty list.
    pub async fn live_india_markers(&self, refresh: bool) -> Vec<Marker> {
        if !refresh {
            let cached = self.cache.load();
            if !cached.is_empty() {
                return cached;
            }
        }

        match self.pipeline.fetch_markers(Scope::India).await {
            Ok(markers) => {
                if let Err(e) = self.cache.save(&markers) {
                    tracing::warn!(error = %e, "Cache write-through failed");
                }
                markers
            }
            Err(e) => {
                tracing::warn!(error = %e, "Live fetch failed, serving empty result");
                Vec::new()
            }
        }
    }
}
