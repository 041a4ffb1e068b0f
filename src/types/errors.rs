//! Tipos de erro do recency.

use thiserror::Error;

/// Tipo de resultado padrão do recency.
pub type RecencyResult<T> = Result<T, RecencyError>;

/// Erros possíveis no recency.
#[derive(Error, Debug)]
pub enum RecencyError {
    #[error("Não é possível remover de uma lista de recência vazia")]
    EmptyContainer,

    #[error("Capacidade inválida {0}: esperado -1 (ilimitada), 0 ou um limite positivo")]
    InvalidCapacity(i64),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RecencyError {
    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Verifica se é o caso esperado de "nada para remover".
    pub fn is_empty_container(&self) -> bool {
        matches!(self, Self::EmptyContainer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RecencyError::EmptyContainer.to_string(),
            "Não é possível remover de uma lista de recência vazia"
        );
        assert!(RecencyError::InvalidCapacity(-7)
            .to_string()
            .starts_with("Capacidade inválida -7"));
        assert_eq!(
            RecencyError::config("bad level").to_string(),
            "Erro de configuração: bad level"
        );
    }

    #[test]
    fn test_is_empty_container() {
        assert!(RecencyError::EmptyContainer.is_empty_container());
        assert!(!RecencyError::InvalidCapacity(-2).is_empty_container());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: RecencyError = io.into();
        assert!(matches!(err, RecencyError::Io(_)));
    }
}
