// src/domain/stop_words/filter.rs
use super::StopWordSet;

pub const SLUG_DELIMITER: char = '-';

/// A filtered slug shorter than this is discarded in favour of the original.
pub const MIN_SLUG_WORDS: usize = 3;

/// Drops every hyphen-delimited segment of `slug` found in `words`.
///
/// Segment order is preserved. When fewer than [`MIN_SLUG_WORDS`] segments
/// survive, the original slug is returned untouched.
pub fn remove_stop_words(slug: &str, words: &StopWordSet) -> String {
    if words.is_empty() {
        return slug.to_string();
    }

    let kept: Vec<&str> = slug
        .split(SLUG_DELIMITER)
        .filter(|segment| !words.contains(segment))
        .collect();

    if kept.len() < MIN_SLUG_WORDS {
        return slug.to_string();
    }

    kept.join(&SLUG_DELIMITER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> StopWordSet {
        list.iter().copied().collect()
    }

    #[test]
    fn removes_leading_stop_word() {
        assert_eq!(
            remove_stop_words("the-quick-brown-fox-jumps", &words(&["the"])),
            "quick-brown-fox-jumps"
        );
    }

    #[test]
    fn keeps_original_when_too_few_words_remain() {
        assert_eq!(
            remove_stop_words("the-fox-jumps", &words(&["the", "fox"])),
            "the-fox-jumps"
        );
    }

    #[test]
    fn exactly_three_remaining_words_is_accepted() {
        assert_eq!(remove_stop_words("a-b-c-d-e", &words(&["a", "b"])), "c-d-e");
    }

    #[test]
    fn empty_set_is_identity() {
        assert_eq!(remove_stop_words("hello-world", &StopWordSet::empty()), "hello-world");
        assert_eq!(remove_stop_words("", &StopWordSet::empty()), "");
        assert_eq!(remove_stop_words("a--b", &StopWordSet::empty()), "a--b");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            remove_stop_words("The-quick-brown-fox", &words(&["the"])),
            "The-quick-brown-fox"
        );
    }

    #[test]
    fn repeated_stop_words_are_all_removed() {
        assert_eq!(
            remove_stop_words("the-cat-and-the-hat-and-the-bat", &words(&["the", "and"])),
            "cat-hat-bat"
        );
    }

    #[test]
    fn only_whole_segments_match() {
        assert_eq!(
            remove_stop_words("theory-of-another-thing", &words(&["the", "an", "of"])),
            "theory-another-thing"
        );
    }

    #[test]
    fn short_slugs_are_never_changed() {
        let stop = words(&["a", "b"]);
        for slug in ["", "a", "a-b", "b-c"] {
            assert_eq!(remove_stop_words(slug, &stop), slug);
        }
    }

    #[test]
    fn output_is_a_subsequence_and_idempotent() {
        let stop = words(&["a", "of", "the", "in"]);
        let slugs = [
            "the-lord-of-the-rings",
            "a-tale-of-two-cities",
            "in-the-heat-of-the-night",
            "war-and-peace",
            "one-flew-over-the-cuckoos-nest",
        ];

        for slug in slugs {
            let once = remove_stop_words(slug, &stop);

            let mut input = slug.split(SLUG_DELIMITER);
            for segment in once.split(SLUG_DELIMITER) {
                assert!(
                    input.any(|candidate| candidate == segment),
                    "{once} is not a subsequence of {slug}"
                );
            }

            if once.split(SLUG_DELIMITER).count() > MIN_SLUG_WORDS {
                assert_eq!(remove_stop_words(&once, &stop), once);
            }
        }
    }
}
