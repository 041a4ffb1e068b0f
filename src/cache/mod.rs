//! Lista de recência com remoção do item mais antigo.
//!
//! [`RecencyList`] mantém os itens do mais novo (head) ao mais antigo (tail)
//! e remove o mais antigo quando uma inserção excederia a [`Capacity`].
//! [`SyncRecencyList`] é a variante thread-safe opcional.

mod capacity;
mod list;
mod sync;

pub use capacity::{Capacity, UNBOUNDED};
pub use list::{IntoIter, Iter, RecencyList};
pub use sync::SyncRecencyList;
