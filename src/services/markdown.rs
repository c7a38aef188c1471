use pulldown_cmark::{html, Options, Parser};

/// Renders CommonMark to HTML with no extensions enabled.
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, Options::empty());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
