use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no input strings given")]
    NoInput,

    #[error("too many strings: {count} given, at most {max} supported")]
    TooManyStrings { count: usize, max: usize },

    #[error(
        "string {word} contains reserved terminator {:?} at byte {position}",
        as_char(.symbol)
    )]
    ReservedSymbol {
        word: usize,
        position: usize,
        symbol: u8,
    },

    #[error("node arena exhausted: limit of {limit} nodes reached")]
    CapacityExhausted { limit: usize },
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}
