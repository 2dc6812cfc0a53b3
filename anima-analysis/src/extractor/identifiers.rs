//! Identifier sub-word splitting.
//!
//! Convention is auto-detected: split on `_` when present, otherwise on
//! case transitions and digit boundaries. All tokens come out lowercase.

use smallvec::SmallVec;

/// Split an identifier into lowercase sub-words.
///
/// `fetch_user_record` → [fetch, user, record]
/// `fetchUserRecord`   → [fetch, user, record]
/// `parseV2Header`     → [parse, v, 2, header]
pub fn split_identifier(name: &str) -> SmallVec<[String; 4]> {
    if name.contains('_') {
        return name
            .split('_')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect();
    }
    split_camel(name)
}

fn split_camel(name: &str) -> SmallVec<[String; 4]> {
    let mut words = SmallVec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        let boundary = match prev {
            Some(p) => {
                (ch.is_uppercase() && p.is_lowercase())
                    || (ch.is_ascii_digit() != p.is_ascii_digit())
            }
            None => false,
        };
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current).to_lowercase());
        }
        current.push(ch);
        prev = Some(ch);
    }
    if !current.is_empty() {
        words.push(current.to_lowercase());
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(name: &str) -> Vec<String> {
        split_identifier(name).into_vec()
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(split("fetch_user_record"), vec!["fetch", "user", "record"]);
        assert_eq!(split("__dunder__"), vec!["dunder"]);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(split("fetchUserRecord"), vec!["fetch", "user", "record"]);
        assert_eq!(split("validateInput"), vec!["validate", "input"]);
    }

    #[test]
    fn test_digit_boundaries() {
        assert_eq!(split("parseV2Header"), vec!["parse", "v", "2", "header"]);
    }

    #[test]
    fn test_single_word() {
        assert_eq!(split("run"), vec!["run"]);
        assert_eq!(split(""), Vec::<String>::new());
    }
}
