//! Política de capacidade da lista de recência.
//!
//! Nos arquivos de configuração e nas APIs `*_raw` a capacidade é um inteiro:
//! `-1` desativa a remoção, `0` não aceita nada e um número positivo é o
//! limite máximo.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::errors::{RecencyError, RecencyResult};

/// Valor bruto que significa "sem limite".
pub const UNBOUNDED: i64 = -1;

/// Quantos itens uma lista de recência pode guardar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Capacity {
    /// Nunca remove ao inserir.
    #[default]
    Unbounded,
    /// Guarda no máximo esta quantidade. `Limited(0)` descarta toda inserção.
    Limited(usize),
}

impl Capacity {
    /// Converte a forma inteira bruta.
    pub fn from_raw(raw: i64) -> RecencyResult<Self> {
        match raw {
            UNBOUNDED => Ok(Self::Unbounded),
            n if n >= 0 => usize::try_from(n)
                .map(Self::Limited)
                .map_err(|_| RecencyError::InvalidCapacity(n)),
            n => Err(RecencyError::InvalidCapacity(n)),
        }
    }

    /// Forma inteira bruta; limites acima de `i64::MAX` saturam.
    pub fn as_raw(self) -> i64 {
        match self {
            Self::Unbounded => UNBOUNDED,
            Self::Limited(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// O limite máximo, ou `None` quando ilimitada.
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Limited(n) => Some(n),
        }
    }

    /// Verifica se uma lista com `len` itens cabe nesta capacidade.
    pub fn admits(self, len: usize) -> bool {
        self.limit().map_or(true, |limit| len <= limit)
    }

    /// Verifica se uma lista com `len` itens precisa remover antes da próxima inserção.
    pub(crate) fn is_reached_by(self, len: usize) -> bool {
        self.limit().is_some_and(|limit| len >= limit)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = RecencyError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<Capacity> for i64 {
    fn from(capacity: Capacity) -> Self {
        capacity.as_raw()
    }
}

impl From<usize> for Capacity {
    fn from(limit: usize) -> Self {
        Self::Limited(limit)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Limited(n) => write!(f, "{n}"),
        }
    }
}
