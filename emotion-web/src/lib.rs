//! Configuração compartilhada entre o servidor web e o relatório de linha de comando

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use emotion_core::{EmotionPipeline, Lexicon};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Variável de ambiente com o endereço do servidor.
pub const ADDR_ENV: &str = "EMOTION_WEB_ADDR";
/// Variável de ambiente com o caminho de um léxico JSON.
pub const LEXICON_ENV: &str = "EMOTION_LEXICON";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Configuração do servidor, lida do ambiente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    /// `None` usa o léxico embutido.
    pub lexicon: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(ADDR_ENV).ok(),
            std::env::var(LEXICON_ENV).ok(),
        )
    }

    fn from_vars(addr: Option<String>, lexicon: Option<String>) -> Self {
        Self {
            addr: addr
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            lexicon: lexicon.filter(|p| !p.trim().is_empty()).map(PathBuf::from),
        }
    }
}

/// Inicializa o `tracing` com filtro vindo de `RUST_LOG` (padrão: `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Constrói o pipeline com o léxico do arquivo indicado, ou o embutido.
pub fn load_pipeline(lexicon_path: Option<&Path>) -> Result<EmotionPipeline> {
    let lexicon = match lexicon_path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("abrindo léxico {}", path.display()))?;
            let lexicon = Lexicon::from_json_reader(BufReader::new(file))
                .with_context(|| format!("lendo léxico {}", path.display()))?;
            info!("Léxico carregado de {} ({} palavras)", path.display(), lexicon.len());
            lexicon
        }
        None => {
            let lexicon = Lexicon::builtin();
            info!("Usando léxico embutido ({} palavras)", lexicon.len());
            lexicon
        }
    };
    EmotionPipeline::new(lexicon).context("montando o pipeline")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::from_vars(None, Some("  ".to_string()));
        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.lexicon, None);
    }

    #[test]
    fn test_config_overrides() {
        let config = ServerConfig::from_vars(
            Some("127.0.0.1:8080".to_string()),
            Some("lexicon.json".to_string()),
        );
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.lexicon, Some(PathBuf::from("lexicon.json")));
    }

    #[test]
    fn test_missing_lexicon_file() {
        let err = load_pipeline(Some(Path::new("/nonexistent/lexicon.json")))
            .err()
            .unwrap();
        assert!(err.to_string().contains("abrindo léxico"));
    }

    #[test]
    fn test_builtin_pipeline() {
        let pipeline = load_pipeline(None).unwrap();
        assert!(pipeline.analyze("awful").unwrap().polarity < 0.0);
    }
}
