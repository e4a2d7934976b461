//! Student Service
//!
//! Read-through cache in front of the student listing, plus the write paths
//! that must drop that cache once they commit.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{Result, StudentError};
use crate::models::{NewStudent, Student, StudentUpdate, StudentView};
use crate::store::StudentStore;

/// Cache key of the full student listing.
pub const STUDENTS_LIST_KEY: &str = "students";

/// The cached payload: every student with its links, in store order.
pub type StudentListing = Vec<StudentView>;

/// Coordinates the listing cache with the persistent store.
///
/// The cache lock is never held while the store is queried. A listing read
/// racing a write can therefore put a just-invalidated snapshot back; it
/// stays at most one TTL or until the next write.
pub struct StudentService {
    store: Arc<dyn StudentStore>,
    cache: Arc<RwLock<CacheStore<StudentListing>>>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>, cache: CacheStore<StudentListing>) -> Self {
        Self {
            store,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    // == List ==
    /// Returns every student with links, from cache when fresh.
    ///
    /// On a miss the store is queried and the result cached. A failed query
    /// is propagated and leaves the cache empty.
    pub async fn list_students(&self) -> Result<StudentListing> {
        // write lock: a lookup may evict and always updates recency/stats
        let cached = self.cache.write().await.get(STUDENTS_LIST_KEY);
        if let Some(listing) = cached {
            debug!("Serving {} students from cache", listing.len());
            return Ok(listing);
        }

        info!("Students cache miss, querying store");
        let students = self.store.select_all().await.map_err(|e| {
            warn!("Failed to load students: {}", e);
            e
        })?;

        let listing: StudentListing = students.into_iter().map(StudentView::from).collect();
        self.cache
            .write()
            .await
            .put(STUDENTS_LIST_KEY.to_string(), listing.clone());

        Ok(listing)
    }

    // == Invalidate ==
    /// Drops the cached listing. Called after every committed write.
    pub async fn invalidate_on_write(&self) {
        invalidate_listing(&self.cache).await;
    }

    /// Single-record read, straight from the store.
    pub async fn get_student(&self, id: i64) -> Result<Student> {
        self.store.get_by_id(id).await
    }

    pub async fn create_student(&self, student: NewStudent) -> Result<Student> {
        let created = self
            .write_then_invalidate(move |store| async move { store.insert(student).await })
            .await?;
        info!("Created student {}", created.id);
        Ok(created)
    }

    pub async fn update_student(&self, id: i64, changes: StudentUpdate) -> Result<Student> {
        let updated = self
            .write_then_invalidate(move |store| async move { store.update(id, changes).await })
            .await?;
        info!("Updated student {}", id);
        Ok(updated)
    }

    pub async fn delete_student(&self, id: i64) -> Result<Student> {
        let removed = self
            .write_then_invalidate(move |store| async move { store.delete(id).await })
            .await?;
        info!("Deleted student {}", id);
        Ok(removed)
    }

    /// Runs a store write and the listing invalidation as one spawned task.
    ///
    /// The task outlives the caller, so a request dropped after the write
    /// commits still evicts the listing. Invalidation is skipped only when
    /// the store reports the write did not happen.
    async fn write_then_invalidate<T, F, Fut>(&self, write: F) -> Result<T>
    where
        F: FnOnce(Arc<dyn StudentStore>) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        let pending = write(Arc::clone(&self.store));
        let cache = Arc::clone(&self.cache);

        let task = tokio::spawn(async move {
            let result = pending.await;
            if may_have_committed(&result) {
                invalidate_listing(&cache).await;
            }
            result
        });

        task.await
            .map_err(|e| StudentError::StoreUnavailable(format!("write task failed: {}", e)))?
    }

    // == Cache Introspection ==
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// TTL in seconds and capacity of the listing cache.
    pub async fn cache_settings(&self) -> (u64, usize) {
        let cache = self.cache.read().await;
        (cache.ttl().as_secs(), cache.capacity())
    }

    /// Whether a fresh listing is currently cached.
    pub async fn is_listing_cached(&self) -> bool {
        self.cache.read().await.contains_fresh(STUDENTS_LIST_KEY)
    }
}

async fn invalidate_listing(cache: &RwLock<CacheStore<StudentListing>>) {
    if cache.write().await.invalidate(STUDENTS_LIST_KEY) {
        info!("Students cache invalidated");
    }
}

/// False only for errors that prove nothing was written.
fn may_have_committed<T>(result: &Result<T>) -> bool {
    !matches!(
        result,
        Err(StudentError::NotFound(_))
            | Err(StudentError::DuplicateIdentifier(_))
            | Err(StudentError::InvalidRequest(_))
    )
}
