//! Minimal document model the chart renders into and pointer events mutate.
//!
//! Just enough DOM for this crate: ordered attributes, an inline style list,
//! a text node per element, id lookup, `tag.class` selection, and HTML output.

/// Host page stylesheet: tooltip starts hidden, bars and axes on a dark page.
pub const HOST_STYLESHEET: &str = "\
body { background: #1f2146; color: #e0e2fc; font-family: sans-serif; margin: 0; }
#wrapper { position: relative; margin: 0 auto; width: 90vw; }
#title { text-align: center; font-weight: 300; letter-spacing: 2px; }
.bar:hover { fill: #7b84e6; }
.y-axis, .x-axis { color: #e0e2fc; }
#tooltip {
  position: absolute; top: 0; left: 0; opacity: 0; pointer-events: none;
  padding: 0.6em 1em; background: #e0e2fc; color: #1f2146; border-radius: 4px;
  transition: opacity 0.15s ease-out;
}
#tooltip #date { font-weight: bold; margin-bottom: 0.3em; }
";

const SELF_CLOSING: [&str; 3] = ["rect", "line", "path"];

/// Render a coordinate the way a browser prints a JS number: `900`, `397.5`, never `-0`.
pub fn number(v: f64) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_style(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_style(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|c| c.split_whitespace().any(|x| x == class))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Replace in place, keeping the original attribute order.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_style(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.styles.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.styles.push((name.to_string(), value)),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Append and hand back the new child so callers can keep building under it.
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Depth-first search, self included.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_by_id_mut(id))
    }

    fn matches(&self, selector: &str) -> bool {
        match selector.split_once('.') {
            Some(("", class)) => self.has_class(class),
            Some((tag, class)) => self.tag == tag && self.has_class(class),
            None => self.tag == selector,
        }
    }

    /// Descendants (self excluded) matching `tag`, `.class` or `tag.class`, in document order.
    pub fn select_all(&self, selector: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        for c in &self.children {
            if c.matches(selector) {
                out.push(c);
            }
            out.extend(c.select_all(selector));
        }
        out
    }

    pub fn select(&self, selector: &str) -> Option<&Element> {
        self.children.iter().find_map(|c| {
            if c.matches(selector) {
                Some(c)
            } else {
                c.select(selector)
            }
        })
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (k, v) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", k, escape_attr(v)));
        }
        if !self.styles.is_empty() {
            let css = self
                .styles
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(&format!(" style=\"{}\"", escape_attr(&css)));
        }
        let empty = self.children.is_empty() && self.text.is_none();
        if empty && SELF_CLOSING.contains(&self.tag.as_str()) {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(t) = &self.text {
            out.push_str(&escape_text(t));
        }
        for c in &self.children {
            c.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }

    pub fn to_html(&self) -> String {
        let mut s = String::new();
        self.write_html(&mut s);
        s
    }
}

/// A page: a stylesheet and a body tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    stylesheet: String,
    body: Element,
}

impl Document {
    /// A document with an empty body and no stylesheet.
    pub fn empty() -> Self {
        Self {
            stylesheet: String::new(),
            body: Element::new("body"),
        }
    }

    /// The skeleton the chart expects: `#wrapper`, and `#tooltip` holding `#date` and `#gdp`.
    pub fn host() -> Self {
        let body = Element::new("body")
            .with_child(Element::new("div").with_attr("id", "wrapper"))
            .with_child(
                Element::new("div")
                    .with_attr("id", "tooltip")
                    .with_child(Element::new("div").with_attr("id", "date"))
                    .with_child(Element::new("div").with_attr("id", "gdp")),
            );
        Self {
            stylesheet: HOST_STYLESHEET.to_string(),
            body,
        }
    }

    pub fn from_body(body: Element, stylesheet: impl Into<String>) -> Self {
        Self {
            stylesheet: stylesheet.into(),
            body,
        }
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    pub fn select_all(&self, selector: &str) -> Vec<&Element> {
        self.body.select_all(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attribute_keeps_order() {
        let mut e = Element::new("rect")
            .with_attr("class", "bar")
            .with_attr("x", "1");
        e.set_attribute("class", "bar wide");
        assert_eq!(e.attributes()[0], ("class".to_string(), "bar wide".to_string()));
        assert!(e.has_class("wide"));
        assert_eq!(e.to_html(), r#"<rect class="bar wide" x="1"/>"#);
    }

    #[test]
    fn html_is_escaped() {
        let e = Element::new("text")
            .with_attr("data-x", "a\"b")
            .with_text("<GDP & co>");
        assert_eq!(
            e.to_html(),
            r#"<text data-x="a&quot;b">&lt;GDP &amp; co&gt;</text>"#
        );
    }

    #[test]
    fn number_prints_like_a_browser() {
        assert_eq!(number(900.0), "900");
        assert_eq!(number(397.5), "397.5");
        assert_eq!(number(-0.0), "0");
    }

    #[test]
    fn host_skeleton_has_tooltip_children() {
        let doc = Document::host();
        let tip = doc.get_element_by_id("tooltip").unwrap();
        assert!(tip.find_by_id("date").is_some());
        assert!(tip.find_by_id("gdp").is_some());
        assert!(doc.get_element_by_id("wrapper").is_some());
    }
}
