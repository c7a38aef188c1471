use crate::models::domain::SessionUser;

pub const INDEX_HTML: &str = include_str!("../templates/index.html");

const USER_PANEL_SLOT: &str = "{{user_panel}}";

/// Renders the single page, greeting `user` when the login gate is on.
pub fn render_index(user: Option<&SessionUser>) -> String {
    let panel = match user {
        Some(user) => format!(
            r#"Signed in as <strong>{}</strong> &middot; <a href="/logout">Log out</a>"#,
            escape_html(&user.name)
        ),
        None => String::new(),
    };

    INDEX_HTML.replace(USER_PANEL_SLOT, &panel)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_index_anonymous() {
        let html = render_index(None);
        assert!(!html.contains(USER_PANEL_SLOT));
        assert!(!html.contains("/logout"));
        assert!(html.contains(r#"name="prompt""#));
    }

    #[test]
    fn test_render_index_escapes_user_name() {
        let user = SessionUser::new("u1", "<Ann & Co>", "a@x.com");
        let html = render_index(Some(&user));

        assert!(html.contains("&lt;Ann &amp; Co&gt;"));
        assert!(html.contains(r#"href="/logout""#));
    }
}
