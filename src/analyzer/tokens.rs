//! Whitespace tokenizer with punctuation stripping.
//!
//! Tokens keep interior apostrophes so contractions ("don't", "can't")
//! survive intact for the negation table; everything else that is not
//! alphanumeric is trimmed off the edges.

/// Split already-lowercased text into cleaned tokens, in order.
pub fn tokenize(lowered: &str) -> Vec<&str> {
    lowered
        .split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .trim_matches('\'')
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// The token immediately before `index`, if any.
pub fn previous<'a>(tokens: &[&'a str], index: usize) -> Option<&'a str> {
    if index == 0 {
        None
    } else {
        tokens.get(index - 1).copied()
    }
}

/// The token immediately after `index`, if any.
pub fn next<'a>(tokens: &[&'a str], index: usize) -> Option<&'a str> {
    tokens.get(index + 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_strips_punctuation() {
        assert_eq!(
            tokenize("feeling good, mostly!  (i think...)"),
            vec!["feeling", "good", "mostly", "i", "think"]
        );
    }

    #[test]
    fn keeps_contractions() {
        assert_eq!(tokenize("i didn't sleep"), vec!["i", "didn't", "sleep"]);
    }

    #[test]
    fn strips_quoting_apostrophes() {
        assert_eq!(tokenize("'great' day"), vec!["great", "day"]);
    }

    #[test]
    fn drops_punctuation_only_tokens() {
        assert_eq!(tokenize("well -- fine"), vec!["well", "fine"]);
    }

    #[test]
    fn neighbors_at_boundaries_are_none() {
        let tokens = tokenize("so very tired");
        assert_eq!(previous(&tokens, 0), None);
        assert_eq!(previous(&tokens, 2), Some("very"));
        assert_eq!(next(&tokens, 2), None);
        assert_eq!(next(&tokens, 0), Some("very"));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
