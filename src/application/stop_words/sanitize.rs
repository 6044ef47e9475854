// src/application/stop_words/sanitize.rs

/// Plain-text sanitization for single-line settings: strips markup, turns
/// line breaks and tabs into spaces, collapses whitespace runs and trims.
pub fn sanitize_text_field(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut in_tag = false;

    for (idx, ch) in input.char_indices() {
        match ch {
            '<' if !in_tag && opens_tag(&input[idx + 1..]) => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            c if c.is_whitespace() => text.push(' '),
            c if c.is_control() => {}
            c => text.push(c),
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A `<` starts markup only when a tag name, `/` or `!` follows and the tag
/// closes before the next `<`. Anything else is a literal less-than sign.
fn opens_tag(rest: &str) -> bool {
    let starts_like_tag = rest
        .chars()
        .next()
        .is_some_and(|next| next.is_ascii_alphabetic() || next == '/' || next == '!');
    let closes = match (rest.find('>'), rest.find('<')) {
        (Some(close), Some(open)) => close < open,
        (Some(_), None) => true,
        (None, _) => false,
    };
    starts_like_tag && closes
}
