//! Entity → receipt translation.

use wastenot_core::ServiceReceipt;

/// Maps a persisted entity onto the receipt returned to the caller.
///
/// `culture` selects the formatting culture; handlers always pass `None`
/// (culture-invariant formatting).
pub trait ReceiptMapper<E>: Send + Sync {
    fn map(&self, entity: &E, culture: Option<&str>) -> ServiceReceipt;
}

impl<E, T: ReceiptMapper<E> + ?Sized> ReceiptMapper<E> for std::sync::Arc<T> {
    fn map(&self, entity: &E, culture: Option<&str>) -> ServiceReceipt {
        (**self).map(entity, culture)
    }
}
