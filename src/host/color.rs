/// Marker the client renders as a formatting code
pub const SECTION_SIGN: char = '§';

const ALT_COLOR_CHAR: char = '&';

/// Replaces `&` color codes (`&0`-`&9`, `&a`-`&f`, either case) with their
/// `§`-prefixed lowercase form. Everything else is left untouched.
pub fn translate(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == ALT_COLOR_CHAR && chars[i + 1].is_ascii_hexdigit() {
            chars[i] = SECTION_SIGN;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("hello", "hello")]
    #[case::digit("&4red", "§4red")]
    #[case::lowercases_code("&Ebold &e", "§ebold §e")]
    #[case::not_a_color("&k&z&&", "&k&z&&")]
    #[case::double_ampersand("&&a", "&§a")]
    #[case::trailing_ampersand("end&", "end&")]
    #[case::empty("", "")]
    #[case::multibyte("&a✓ ok", "§a✓ ok")]
    fn translate_rewrites_color_codes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(translate(input), expected);
    }
}
