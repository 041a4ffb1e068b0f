//! Lista de recência duplamente encadeada sobre uma arena de índices.
//!
//! Os nós ficam em um `Vec` de slots e se ligam por índice, então as cadeias
//! para frente e para trás nunca formam ciclos de posse. `head` é o nó
//! adicionado mais recentemente e `tail` o mais antigo; as duas pontas são
//! atualizadas em O(1).
//!
//! A lista tem um único dono: toda mutação usa `&mut self`. Para compartilhar
//! entre threads use [`SyncRecencyList`](super::SyncRecencyList) ou um lock
//! externo.

use std::fmt;
use std::iter::FusedIterator;

use crate::cache::capacity::Capacity;
use crate::types::config::CacheConfig;
use crate::types::errors::{RecencyError, RecencyResult};

#[derive(Clone)]
struct Node<T> {
    item: T,
    /// Vizinho em direção ao head (mais novo).
    prev: Option<usize>,
    /// Vizinho em direção ao tail (mais antigo).
    next: Option<usize>,
}

/// Lista limitada de itens ordenados por recência de inserção.
///
/// Inserir em uma lista cheia remove primeiro o item mais antigo. Capacidade
/// `0` descarta toda inserção e [`Capacity::Unbounded`] nunca remove.
#[derive(Clone)]
pub struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    capacity: Capacity,
}

impl<T> RecencyList<T> {
    /// Cria uma lista vazia com a capacidade informada.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            capacity,
        }
    }

    /// Cria uma lista vazia que nunca remove.
    pub fn unbounded() -> Self {
        Self::new(Capacity::Unbounded)
    }

    /// Cria uma lista vazia com no máximo `limit` itens.
    pub fn with_limit(limit: usize) -> Self {
        Self::new(Capacity::Limited(limit))
    }

    /// Cria uma lista vazia a partir de uma capacidade bruta (`-1`, `0` ou positiva).
    ///
    /// Qualquer outro valor negativo é rejeitado com
    /// [`RecencyError::InvalidCapacity`].
    pub fn from_raw(raw: i64) -> RecencyResult<Self> {
        Capacity::from_raw(raw).map(Self::new)
    }

    /// Cria uma lista vazia dimensionada pela seção `cache` da configuração.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Adiciona `item` como a entrada mais nova.
    ///
    /// Retorna o item removido para abrir espaço, se houver. Com capacidade `0`
    /// o item é descartado e nada é guardado.
    pub fn insert(&mut self, item: T) -> Option<T> {
        if self.capacity == Capacity::Limited(0) {
            tracing::trace!("Zero capacity, discarding item");
            return None;
        }

        let evicted = if self.capacity.is_reached_by(self.len) {
            let evicted = self.unlink_tail();
            tracing::debug!(
                capacity = %self.capacity,
                "Evicted oldest item to make room"
            );
            evicted
        } else {
            None
        };

        let idx = self.alloc(Node {
            item,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;

        tracing::trace!(len = self.len, "Inserted item");
        evicted
    }

    /// Remove e retorna o item mais antigo.
    pub fn evict_oldest(&mut self) -> RecencyResult<T> {
        self.unlink_tail().ok_or(RecencyError::EmptyContainer)
    }

    /// O mesmo que [`evict_oldest`](Self::evict_oldest).
    pub fn pop(&mut self) -> RecencyResult<T> {
        self.evict_oldest()
    }

    /// Itens atuais, do mais antigo ao mais novo.
    pub fn list_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Altera o limite, removendo os itens mais antigos até a lista caber.
    ///
    /// Retorna os itens removidos, do mais antigo ao mais novo.
    pub fn set_capacity(&mut self, limit: usize) -> Vec<T> {
        self.set_capacity_policy(Capacity::Limited(limit))
    }

    /// Remove o limite. Nenhum item é removido.
    pub fn set_unbounded(&mut self) {
        self.capacity = Capacity::Unbounded;
    }

    /// Altera o limite a partir de um inteiro bruto, lido como em
    /// [`from_raw`](Self::from_raw): `-1` remove o limite, `0` ou positivo o define.
    ///
    /// Valores abaixo de `-1` falham com [`RecencyError::InvalidCapacity`] e
    /// não alteram a lista.
    pub fn set_capacity_raw(&mut self, raw: i64) -> RecencyResult<Vec<T>> {
        let capacity = Capacity::from_raw(raw).map_err(|e| {
            tracing::warn!(raw, "Rejected invalid capacity");
            e
        })?;
        Ok(self.set_capacity_policy(capacity))
    }

    /// Aplica qualquer política de capacidade, removendo os mais antigos se preciso.
    pub fn set_capacity_policy(&mut self, capacity: Capacity) -> Vec<T> {
        self.capacity = capacity;

        let mut evicted = Vec::new();
        while !capacity.admits(self.len) {
            match self.unlink_tail() {
                Some(item) => evicted.push(item),
                None => break,
            }
        }

        if !evicted.is_empty() {
            tracing::debug!(
                evicted = evicted.len(),
                capacity = %capacity,
                "Shrunk recency list"
            );
        }
        evicted
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Verifica se a próxima inserção vai remover (ou, com capacidade `0`, descartar).
    pub fn is_full(&self) -> bool {
        self.capacity.is_reached_by(self.len)
    }

    /// O item que a próxima remoção tiraria.
    pub fn peek_oldest(&self) -> Option<&T> {
        self.tail.map(|idx| &self.node(idx).item)
    }

    /// O item inserido mais recentemente.
    pub fn peek_newest(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).item)
    }

    /// Itera do mais antigo ao mais novo. Use `rev()` para o contrário.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.tail,
            back: self.head,
            remaining: self.len,
        }
    }

    /// Descarta todos os itens. A capacidade é mantida.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<Node<T>> {
        let node = self.slots[idx].take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(node)
    }

    fn unlink_tail(&mut self) -> Option<T> {
        let node = self.release(self.tail?)?;
        self.tail = node.prev;
        match node.prev {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.head = None,
        }
        Some(node.item)
    }

    fn unlink_head(&mut self) -> Option<T> {
        let node = self.release(self.head?)?;
        self.head = node.next;
        match node.next {
            Some(next) => self.node_mut(next).prev = None,
            None => self.tail = None,
        }
        Some(node.item)
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Some(node) => node,
            None => unreachable!("recency list link points at vacant slot {idx}"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Some(node) => node,
            None => unreachable!("recency list link points at vacant slot {idx}"),
        }
    }

    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: fmt::Debug> fmt::Debug for RecencyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyList")
            .field("capacity", &self.capacity)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Extend<T> for RecencyList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> FromIterator<T> for RecencyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::unbounded();
        list.extend(iter);
        list
    }
}

/// Iterador por referência, do mais antigo ao mais novo.
pub struct Iter<'a, T> {
    slots: &'a [Option<Node<T>>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.slots[self.front?].as_ref()?;
        self.front = node.prev;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.slots[self.back?].as_ref()?;
        self.back = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RecencyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterador por valor, do mais antigo ao mais novo.
pub struct IntoIter<T> {
    list: RecencyList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.unlink_tail()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.unlink_head()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RecencyList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
