use gst_lcs::{longest_common_substring, GeneralizedSuffixTree, LcsFinder};

#[cfg(test)]
mod tests {

    use super::*;

    fn build(words: &[&[u8]]) -> GeneralizedSuffixTree {
        LcsFinder::new().build_tree(words).unwrap()
    }

    #[test]
    fn test_is_suffix() {
        let s1: &[u8] = b"abcdef";
        let tree = build(&[s1]);
        for i in 0..s1.len() {
            assert!(tree.is_suffix(&s1[i..]), "{:?} should be a suffix", &s1[i..]);
        }
        assert!(!tree.is_suffix(b"a"));
        assert!(!tree.is_suffix(b"ab"));

        let s2: &[u8] = b"defghij";
        let tree = build(&[s1, s2]);
        for i in 0..s1.len() {
            assert!(tree.is_suffix(&s1[i..]), "{:?} should be a suffix", &s1[i..]);
        }
        for i in 0..s2.len() {
            assert!(tree.is_suffix(&s2[i..]), "{:?} should be a suffix", &s2[i..]);
        }
        assert!(!tree.is_suffix(b"bc"));
    }

    #[test]
    fn test_is_substr() {
        let s1: &[u8] = b"abcdef";
        let tree = build(&[s1]);
        for i in 0..s1.len() {
            for j in i..s1.len() {
                assert!(
                    tree.is_substr(&s1[i..(j + 1)]),
                    "{:?} should be a substring",
                    &s1[i..(j + 1)]
                );
            }
        }
        assert!(!tree.is_substr(b"bcz"));
        assert!(!tree.is_substr(b"cdx"));

        let s2: &[u8] = b"defghij";
        let tree = build(&[s1, s2]);
        for s in [s1, s2] {
            for i in 0..s.len() {
                for j in i..s.len() {
                    assert!(
                        tree.is_substr(&s[i..(j + 1)]),
                        "{:?} should be a substring",
                        &s[i..(j + 1)]
                    );
                }
            }
        }
        assert!(!tree.is_substr(b"fd"));
    }

    #[test]
    fn test_longest_common_substring_all() {
        assert_eq!(longest_common_substring(&["abcde", "bcdef"]).unwrap(), b"bcde");
        assert_eq!(longest_common_substring(&["abc", "def"]).unwrap(), b"");
        assert_eq!(longest_common_substring(&["banana"]).unwrap(), b"banana");
        assert_eq!(
            longest_common_substring(&["xyzabc", "abcxyz", "pqabct"]).unwrap(),
            b"abc"
        );
        assert_eq!(longest_common_substring(&["aa", "aa", "aa"]).unwrap(), b"aa");
        assert_eq!(
            longest_common_substring(&["123456789", "zyx456789abcd"]).unwrap(),
            b"456789"
        );
    }

    #[test]
    fn test_longest_common_substring_longer_words() {
        assert_eq!(
            longest_common_substring(&[
                "VOTEFORTHEGREATALBANIAFORYOU",
                "CHOOSETHEGREATALBANIANFUTURE"
            ])
            .unwrap(),
            b"THEGREATALBANIA"
        );
        assert_eq!(
            longest_common_substring(&[
                "VOTEFORTHEGREATALBANIAFORYOU",
                "CHOOSETHEGREATALBANIANFUTURE",
                "VOTECHOOSEGREATALBANIATHEFUTURE"
            ])
            .unwrap(),
            b"EGREATALBANIA"
        );
    }

    #[test]
    fn test_ten_words() {
        let words: Vec<String> = (0..10).map(|i| format!("{}needle{}", i, 9 - i)).collect();
        assert_eq!(longest_common_substring(&words).unwrap(), b"needle");
    }

    #[test]
    fn test_empty_word_gives_empty_result() {
        assert_eq!(longest_common_substring(&["abc", ""]).unwrap(), b"");
        assert_eq!(longest_common_substring(&["", ""]).unwrap(), b"");
    }

    #[test]
    fn test_repetitive_words() {
        assert_eq!(
            longest_common_substring(&["aaaaaaaab", "baaaab", "aaaaaa"]).unwrap(),
            b"aaaa"
        );
        assert_eq!(
            longest_common_substring(&["abababab", "babababa"]).unwrap().len(),
            7
        );
    }

    #[test]
    fn test_render() {
        let tree = build(&[b"ab", b"b"]);
        let expected = "\
#
$b#
ab$b#
b
    #
    $b#
";
        assert_eq!(tree.render(), expected);
    }
}
