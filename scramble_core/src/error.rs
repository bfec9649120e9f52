use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// A slot drew `attempts` candidates without finding one the adjacency rule accepts
    #[error("Cannot find a suitable move for slot {slot} after {attempts} attempts")]
    GenerationExhausted { slot: usize, attempts: u32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}
