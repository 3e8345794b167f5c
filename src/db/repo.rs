use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// Substring match against the title. An empty fragment matches
    /// every row (`%%` is a universal wildcard).
    async fn find_by_title(&self, fragment: &str) -> DbResult<Vec<MovieRow>>;
    async fn find_box_office(&self) -> DbResult<Vec<MovieRow>>;
    async fn find_recent(&self) -> DbResult<Vec<MovieRow>>;
}
