//! Word-list validation shared by the generator and the solver.

use crate::error::{Error, Result};

/// Uppercases every word and checks it can live in a `size`x`size` grid.
///
/// Words must be non-empty, made of ASCII letters, and no longer than
/// `size`. Duplicates are kept; each copy is handled independently.
pub fn normalize<S: AsRef<str>>(words: &[S], size: usize) -> Result<Vec<String>> {
    words
        .iter()
        .map(|word| normalize_word(word.as_ref(), size))
        .collect()
}

fn normalize_word(word: &str, size: usize) -> Result<String> {
    let invalid = |reason: String| Error::InvalidWordList {
        word: word.to_string(),
        reason,
    };

    if word.is_empty() {
        return Err(invalid("word is empty".to_string()));
    }
    if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(invalid(format!("{bad:?} is not a letter")));
    }
    // ASCII only, so byte length equals letter count
    if word.len() > size {
        return Err(invalid(format!(
            "{} letters do not fit in a puzzle of size {size}",
            word.len()
        )));
    }

    Ok(word.to_ascii_uppercase())
}
