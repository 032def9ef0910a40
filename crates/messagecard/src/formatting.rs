//! HTML snippets understood by connector cards in `text` fields.

use crate::error::CardError;

fn tag(text: &str, tag: &str) -> String {
    format!("<{tag}>{text}</{tag}>")
}

pub fn bold(text: &str) -> String {
    tag(text, "strong")
}

pub fn italic(text: &str) -> String {
    tag(text, "em")
}

/// Heading of `level` 1 to 3.
pub fn header(text: &str, level: u8) -> Result<String, CardError> {
    if !(1..=3).contains(&level) {
        return Err(CardError::invalid_value(
            "level",
            format!("header level must be 1-3, got {level}"),
        ));
    }
    Ok(tag(text, &format!("h{level}")))
}

pub fn strikethrough(text: &str) -> String {
    tag(text, "strike")
}

pub fn unordered_list<S: AsRef<str>>(items: &[S]) -> String {
    tag(&list_items(items), "ul")
}

pub fn ordered_list<S: AsRef<str>>(items: &[S]) -> String {
    tag(&list_items(items), "ol")
}

fn list_items<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().map(|item| tag(item.as_ref(), "li")).collect()
}

pub fn preformatted(text: &str) -> String {
    tag(text, "pre")
}

pub fn blockquote(text: &str) -> String {
    tag(text, "blockquote")
}

pub fn paragraph(text: &str) -> String {
    tag(text, "p")
}

pub fn link(text: &str, url: &str) -> String {
    format!(r#"<a href="{url}">{text}</a>"#)
}

pub fn img(url: &str, alt_text: Option<&str>) -> String {
    let alt = alt_text
        .map(|alt| format!(r#" alt="{alt}""#))
        .unwrap_or_default();
    format!(r#"<img src="{url}"{alt}></img>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_tags() {
        assert_eq!(bold("text"), "<strong>text</strong>");
        assert_eq!(italic("text"), "<em>text</em>");
        assert_eq!(strikethrough("text"), "<strike>text</strike>");
        assert_eq!(preformatted("text"), "<pre>text</pre>");
        assert_eq!(blockquote("text"), "<blockquote>text</blockquote>");
        assert_eq!(paragraph("text"), "<p>text</p>");
    }

    #[test]
    fn header_levels() {
        assert_eq!(header("text", 1).as_deref(), Ok("<h1>text</h1>"));
        assert_eq!(header("text", 3).as_deref(), Ok("<h3>text</h3>"));
        assert!(matches!(header("text", 4), Err(CardError::InvalidValue { .. })));
        assert!(header("text", 0).is_err());
    }

    #[test]
    fn lists() {
        assert_eq!(
            unordered_list(&["text", "more"]),
            "<ul><li>text</li><li>more</li></ul>"
        );
        assert_eq!(
            ordered_list(&["text".to_string(), "more".to_string()]),
            "<ol><li>text</li><li>more</li></ol>"
        );
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            link("Python", "http://www.python.org"),
            r#"<a href="http://www.python.org">Python</a>"#
        );
        assert_eq!(
            img("http://aka.ms/Fo983c", Some("Duck on a rock")),
            r#"<img src="http://aka.ms/Fo983c" alt="Duck on a rock"></img>"#
        );
        assert_eq!(
            img("http://aka.ms/Fo983c", None),
            r#"<img src="http://aka.ms/Fo983c"></img>"#
        );
    }
}
