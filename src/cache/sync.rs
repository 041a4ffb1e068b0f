//! Lista de recência thread-safe.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::capacity::Capacity;
use crate::cache::list::RecencyList;
use crate::types::errors::RecencyResult;

/// Uma [`RecencyList`] atrás de um único mutex.
///
/// Cada método segura o lock durante toda a chamada, então o limite de
/// capacidade e as ligações da lista continuam consistentes sob uso
/// concorrente. Chamadas de threads diferentes são aplicadas na ordem de
/// aquisição do lock; nada além disso é garantido. Clones compartilham a
/// mesma lista.
pub struct SyncRecencyList<T> {
    inner: Arc<Mutex<RecencyList<T>>>,
}

impl<T> SyncRecencyList<T> {
    pub fn new(capacity: Capacity) -> Self {
        Self::from_list(RecencyList::new(capacity))
    }

    pub fn from_raw(raw: i64) -> RecencyResult<Self> {
        RecencyList::from_raw(raw).map(Self::from_list)
    }

    /// Envolve uma lista existente.
    pub fn from_list(list: RecencyList<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    pub fn insert(&self, item: T) -> Option<T> {
        self.inner.lock().insert(item)
    }

    pub fn evict_oldest(&self) -> RecencyResult<T> {
        self.inner.lock().evict_oldest()
    }

    pub fn pop(&self) -> RecencyResult<T> {
        self.inner.lock().pop()
    }

    pub fn list_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().list_items()
    }

    pub fn set_capacity(&self, limit: usize) -> Vec<T> {
        self.inner.lock().set_capacity(limit)
    }

    pub fn set_capacity_raw(&self, raw: i64) -> RecencyResult<Vec<T>> {
        self.inner.lock().set_capacity_raw(raw)
    }

    pub fn set_unbounded(&self) {
        self.inner.lock().set_unbounded();
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn capacity(&self) -> Capacity {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Executa `f` com acesso exclusivo, para operações compostas que não
    /// podem se intercalar com outras chamadas.
    pub fn with_list<R>(&self, f: impl FnOnce(&mut RecencyList<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<T> Clone for SyncRecencyList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SyncRecencyList<T> {
    fn default() -> Self {
        Self::from_list(RecencyList::default())
    }
}

impl<T> From<RecencyList<T>> for SyncRecencyList<T> {
    fn from(list: RecencyList<T>) -> Self {
        Self::from_list(list)
    }
}
