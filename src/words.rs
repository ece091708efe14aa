use anyhow::Result;
use regex::Regex;

/*
 * Text broken into words on runs of non-word characters.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Words {
    words: Vec<String>,
}

impl Words {
    pub fn parse(text: &str) -> Result<Self> {
        let re = Regex::new(r"\W+")?;
        let words = re
            .split(text)
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(Words { words })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /*
     * Every letter of every word, in order
     */
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().flat_map(str::chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation() {
        let words = Words::parse("abc def").unwrap();
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["abc", "def"]);
    }

    #[test]
    fn letters() {
        let words = Words::parse("abc def").unwrap();
        assert_eq!(
            words.letters().collect::<Vec<_>>(),
            vec!['a', 'b', 'c', 'd', 'e', 'f']
        );
    }

    #[test]
    fn punctuation_and_blanks() {
        let words = Words::parse("  hello,  world!! it's").unwrap();
        let mut seen = vec![];
        for word in words.iter() {
            seen.push(word);
        }
        assert_eq!(seen, vec!["hello", "world", "it", "s"]);

        assert_eq!(Words::parse(" ,. ").unwrap().iter().count(), 0);
    }
}
