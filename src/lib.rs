//! # Recency
//!
//! Lista de recência limitada: os itens ficam em ordem de inserção e o
//! adicionado há mais tempo é removido quando a lista excede a capacidade.
//!
//! ## Módulos
//!
//! - [`cache`] - Lista de recência, política de capacidade e wrapper sincronizado
//! - [`logging`] - Configuração do subscriber de tracing
//! - [`types`] - Configuração e erros
//!
//! ```
//! use recency::RecencyList;
//!
//! let mut list = RecencyList::with_limit(3);
//! list.extend([1, 2, 3, 4]);
//! assert_eq!(list.list_items(), vec![2, 3, 4]);
//! assert_eq!(list.evict_oldest().unwrap(), 2);
//! ```

pub mod cache;
pub mod logging;
pub mod types;

pub use cache::{Capacity, RecencyList, SyncRecencyList};
pub use types::config::Config;
pub use types::errors::{RecencyError, RecencyResult};
