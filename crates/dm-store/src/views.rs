//! View collection seam.

use dm_model::{TabColumn, TabView};
use std::future::Future;

use crate::api::DataManagerApi;
use crate::gateway::ApiGateway;

/// The collection of tabs and their shared column definitions.
///
/// Loading goes through the store's [`ApiGateway`] so failures land in the
/// same error map as the store's own calls.
pub trait ViewCollection {
    /// Column definitions, in display order.
    fn columns(&self) -> &[TabColumn];

    /// The active tab, if any.
    fn selected(&self) -> Option<&TabView>;

    /// Loads column metadata. Completes before returning.
    fn fetch_columns(&mut self);

    /// Loads the saved tabs. Requires column metadata to be present.
    fn fetch_views<A: DataManagerApi>(
        &mut self,
        gateway: &mut ApiGateway<A>,
    ) -> impl Future<Output = ()>;
}
