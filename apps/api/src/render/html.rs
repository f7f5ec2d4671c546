//! Minimal HTML writer used by the template renderers.
//!
//! Every piece of user text goes through `text`/`element`, which escape it;
//! only tag names, classes and inline styles chosen by the templates are
//! written raw.

use std::borrow::Cow;

pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[derive(Debug, Default)]
pub struct Html {
    buf: String,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a tag with arbitrary attributes. Pairs with an empty value are
    /// skipped; values are escaped.
    pub fn open_attrs(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            if value.is_empty() {
                continue;
            }
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape(value));
            self.buf.push('"');
        }
        self.buf.push('>');
        self
    }

    /// Opens `<tag class="..." style="...">`. Empty class or style is omitted.
    pub fn open(&mut self, tag: &str, class: &str, style: &str) -> &mut Self {
        self.open_attrs(tag, &[("class", class), ("style", style)])
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&escape(s));
        self
    }

    /// `<tag class style>text</tag>` in one call.
    pub fn element(&mut self, tag: &str, class: &str, style: &str, text: &str) -> &mut Self {
        self.open(tag, class, style).text(text).close(tag)
    }

    /// `<ul>` with one `<li>` per item; nothing at all when `items` is empty.
    pub fn list<S: AsRef<str>>(
        &mut self,
        class: &str,
        style: &str,
        item_style: &str,
        items: &[S],
    ) -> &mut Self {
        if items.is_empty() {
            return self;
        }
        self.open("ul", class, style);
        for item in items {
            self.element("li", "", item_style, item.as_ref());
        }
        self.close("ul")
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<b>"R&D" it's</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; it&#39;s&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_element_escapes_text_and_omits_empty_attributes() {
        let mut html = Html::new();
        html.element("p", "", "", "a < b");
        assert_eq!(html.finish(), "<p>a &lt; b</p>");
    }

    #[test]
    fn test_list_skips_empty_items_slice() {
        let mut html = Html::new();
        html.list::<&str>("bullets", "", "", &[]);
        assert_eq!(html.finish(), "");
    }

    #[test]
    fn test_list_renders_items_in_order() {
        let mut html = Html::new();
        html.list("b", "", "", &["one", "two"]);
        assert_eq!(
            html.finish(),
            r#"<ul class="b"><li>one</li><li>two</li></ul>"#
        );
    }
}
