use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Default query cleanup: trim, NFKC, drop line breaks
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        text = text.nfkc().collect();

        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(DefaultPreprocessor.process("  run \n"), "run");
    }

    #[test]
    fn blank_input_stays_empty() {
        assert_eq!(DefaultPreprocessor.process(" \t\r\n"), "");
    }

    #[test]
    fn normalizes_compatibility_characters() {
        // fullwidth latin letters fold to ASCII under NFKC
        assert_eq!(DefaultPreprocessor.process("ｒｕｎ"), "run");
    }

    #[test]
    fn inner_line_breaks_become_spaces() {
        assert_eq!(DefaultPreprocessor.process("ice\ncream"), "ice cream");
    }
}
