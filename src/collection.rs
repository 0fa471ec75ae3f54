use crate::error::Result;
use crate::queue::Queue;

/// Opaque identity of the object callers should coordinate on.
///
/// Two roots are equal when they name the same object in memory; the handle
/// never dereferences anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyncRoot(usize);

impl SyncRoot {
    pub fn of<S: ?Sized>(object: &S) -> Self {
        SyncRoot(object as *const S as *const () as usize)
    }
}

/// Capability for generic code that handles containers without knowing their
/// concrete type: element count, bulk export into a caller buffer, and the
/// container's synchronization status.
///
/// `is_synchronized` returning false means the container takes no locks; callers
/// sharing it must agree on a lock for `sync_root` themselves.
pub trait Collection<T> {
    fn count(&self) -> usize;

    fn is_synchronized(&self) -> bool;

    fn sync_root(&self) -> SyncRoot;

    fn copy_to(&self, destination: Option<&mut [T]>, index: isize) -> Result<()>;
}

impl<T: Clone> Collection<T> for Queue<T> {
    fn count(&self) -> usize {
        self.len()
    }

    fn is_synchronized(&self) -> bool {
        false
    }

    fn sync_root(&self) -> SyncRoot {
        SyncRoot::of(self)
    }

    fn copy_to(&self, destination: Option<&mut [T]>, index: isize) -> Result<()> {
        Queue::copy_to(self, destination, index)
    }
}

/// Copies any collection into a fresh `Vec`. An empty collection gives an empty
/// `Vec` instead of the error `copy_to` reports for it.
pub fn to_vec<T, C>(collection: &C) -> Result<Vec<T>>
where
    T: Clone + Default,
    C: Collection<T> + ?Sized,
{
    let mut buffer = vec![T::default(); collection.count()];
    if !buffer.is_empty() {
        collection.copy_to(Some(&mut buffer[..]), 0)?;
    }

    Ok(buffer)
}
