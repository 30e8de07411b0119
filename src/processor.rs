// Compiles a regex literal on first use and reuses it afterwards.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// "♪" as it appears after its UTF-8 bytes were decoded as Windows-1252.
const MISENCODED_MUSIC_NOTE: &str = "\u{e2}\u{2122}\u{aa}";
const MUSIC_NOTE: &str = "♪";

/// Extracts the dialogue from a cue's raw payload.
///
/// Only text inside the first `<Default><b>...</b></Default>` wrapper counts.
/// Payloads without one (positioning-only cues, other markup) yield `None`,
/// as do wrappers holding nothing but whitespace.
pub fn extract_dialogue(payload: &str) -> Option<String> {
    let wrapper = regex!(r"(?s)<Default><b>(.*?)</b></Default>");
    let caps = wrapper.captures(payload)?;
    let text = clean_text(&caps[1]);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn clean_text(text: &str) -> String {
    let text = text.replace('\n', " ");
    // ASCII whitespace only; non-breaking spaces are part of the dialogue.
    let text = regex!(r"[\t\n\x0C\r ]+").replace_all(&text, " ");
    let text = normalise_music_notes(&text);
    text.trim().to_string()
}

fn normalise_music_notes(text: &str) -> String {
    text.replace(MISENCODED_MUSIC_NOTE, MUSIC_NOTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_extract {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected): (&str, Option<&str>) = $value;

                let dialogue = extract_dialogue(input);

                assert_eq!(dialogue.as_deref(), expected);
            }
        )*
        }
    }

    test_extract! {
        test_extract_plain: ("<Default><b>Hello world</b></Default>", Some("Hello world")),
        test_extract_newline: ("<Default><b>Hello\nworld</b></Default>", Some("Hello world")),
        test_extract_tabs: ("<Default><b>Hello\t\t  world</b></Default>", Some("Hello world")),
        test_extract_padded: ("<Default><b>   Hello   </b></Default>", Some("Hello")),
        test_extract_nbsp: ("<Default><b>Quoi\u{a0}?</b></Default>", Some("Quoi\u{a0}?")),
        test_extract_form_feed: ("<Default><b>Page\x0C\x0Cbreak</b></Default>", Some("Page break")),
        test_extract_crlf: ("<Default><b>Hello\r\nworld</b></Default>", Some("Hello world")),
        test_extract_music: ("<Default><b>♪ music ♪</b></Default>", Some("♪ music ♪")),
        test_extract_misencoded_music: ("<Default><b>\u{e2}\u{2122}\u{aa} la la \u{e2}\u{2122}\u{aa}</b></Default>", Some("♪ la la ♪")),
        test_extract_surrounding_markup: ("{\\an8} <Default><b>Hi</b></Default> trailing", Some("Hi")),
        test_extract_first_wrapper_only: ("<Default><b>One</b></Default> <Default><b>Two</b></Default>", Some("One")),
        test_extract_empty_wrapper: ("<Default><b></b></Default>", None),
        test_extract_blank_wrapper: ("<Default><b> \t </b></Default>", None),
        test_extract_unwrapped: ("Hello world", None),
        test_extract_other_wrapper: ("<i>Hello world</i>", None),
        test_extract_unclosed: ("<Default><b>Hello world</b>", None),
        test_extract_empty_payload: ("", None),
    }

    #[test]
    fn literal_and_misencoded_notes_agree() {
        let literal = extract_dialogue("<Default><b>♪</b></Default>");
        let misencoded = extract_dialogue("<Default><b>\u{e2}\u{2122}\u{aa}</b></Default>");

        assert_eq!(literal, misencoded);
        assert_eq!(literal.as_deref(), Some(MUSIC_NOTE));
    }
}
