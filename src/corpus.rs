//! Assembly of the terminated multi-string corpus the tree is built over.

use crate::error::{Error, Result};

/// Reserved terminator bytes. Word `i` is closed by `TERMINATORS[i]`, so at
/// most this many words can share one tree.
pub const TERMINATORS: [u8; 10] = *b"$#@^&|*%()";

/// Maximum number of strings a single corpus can hold.
pub const MAX_WORDS: usize = TERMINATORS.len();

/// Position of one word inside the corpus. `len` includes the terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub offset: usize,
    pub len: usize,
}

impl WordSpan {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// The concatenation `w0 $ w1 # ...` of all input words.
#[derive(Debug, Clone)]
pub struct Corpus {
    bytes: Vec<u8>,
    spans: Vec<WordSpan>,
}

impl Corpus {
    /// Concatenates `words`, appending each word's terminator.
    ///
    /// Fails before anything is built if there are no words, more words than
    /// terminators, or a word already contains a terminator byte.
    pub fn assemble<S: AsRef<[u8]>>(words: &[S]) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::NoInput);
        }
        if words.len() > MAX_WORDS {
            return Err(Error::TooManyStrings {
                count: words.len(),
                max: MAX_WORDS,
            });
        }

        let total: usize = words.iter().map(|w| w.as_ref().len() + 1).sum();
        let mut bytes = Vec::with_capacity(total);
        let mut spans = Vec::with_capacity(words.len());

        for (word, s) in words.iter().enumerate() {
            let s = s.as_ref();
            if let Some(position) = s.iter().position(|b| is_terminator(*b)) {
                return Err(Error::ReservedSymbol {
                    word,
                    position,
                    symbol: s[position],
                });
            }
            spans.push(WordSpan {
                offset: bytes.len(),
                len: s.len() + 1,
            });
            bytes.extend_from_slice(s);
            bytes.push(TERMINATORS[word]);
        }

        Ok(Self { bytes, spans })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.spans.len()
    }

    pub fn word_span(&self, word: usize) -> WordSpan {
        self.spans[word]
    }

    /// The bytes of `word` without its terminator.
    pub fn word(&self, word: usize) -> &[u8] {
        let span = self.spans[word];
        &self.bytes[span.offset..span.end() - 1]
    }

    pub fn terminator(&self, word: usize) -> u8 {
        TERMINATORS[word]
    }

    /// Id of the word whose span covers corpus position `pos`.
    pub fn word_at(&self, pos: usize) -> usize {
        self.spans.partition_point(|span| span.end() <= pos)
    }
}

impl std::ops::Index<usize> for Corpus {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

pub fn is_terminator(byte: u8) -> bool {
    TERMINATORS.contains(&byte)
}
