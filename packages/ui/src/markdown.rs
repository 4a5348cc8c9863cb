use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether a link or image destination may be emitted as-is: relative URLs
/// and `http`, `https` or `mailto` ones.
pub fn is_safe_url(dest: &str) -> bool {
    let dest = dest.trim();
    let Some(colon) = dest.find(':') else {
        return true;
    };
    let scheme = &dest[..colon];
    // A colon after a path, query or fragment delimiter is not a scheme.
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    ALLOWED_SCHEMES
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
}

fn sanitize_dest(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&dest) {
        dest
    } else {
        CowStr::Borrowed("")
    }
}

/// Render note content as HTML. Raw HTML in the source is escaped and link
/// or image destinations with other schemes are emptied.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_dest(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_dest(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::{is_safe_url, render_markdown};

    #[test]
    fn renders_headings_and_lists() {
        let html = render_markdown("# Plan\n\n- one\n- two\n");
        assert!(html.contains("<h1>Plan</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn drops_script_link_destinations() {
        let html = render_markdown("[click me](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("click me"));

        let html = render_markdown("![pic](JavaScript:alert(1)) [x](vbscript:msgbox)");
        assert!(!html.to_ascii_lowercase().contains("script:"));
    }

    #[test]
    fn keeps_web_and_relative_destinations() {
        let html = render_markdown("[site](https://example.com) [doc](/notes/1) [mail](mailto:a@b.c)");
        assert!(html.contains("href=\"https://example.com\""));
        assert!(html.contains("href=\"/notes/1\""));
        assert!(html.contains("href=\"mailto:a@b.c\""));
    }

    #[test]
    fn url_scheme_check() {
        assert!(is_safe_url("HTTP://example.com"));
        assert!(is_safe_url("#section"));
        assert!(is_safe_url("docs/a:b"));
        assert!(!is_safe_url(" javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html,x"));
    }

    #[test]
    fn task_lists_render_checkboxes() {
        let html = render_markdown("- [x] done\n- [ ] todo\n");
        assert!(html.contains("checked"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn empty_content_renders_nothing() {
        assert_eq!(render_markdown(""), "");
    }
}
