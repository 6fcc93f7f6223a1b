use feedline_core::{render_content, render_line, ContentKind, ContentLine, RenderedLine};

#[test]
fn paragraph_renders_as_plain_text() {
    let rendered = render_line(&ContentLine::paragraph("oi")).unwrap();

    assert_eq!(
        rendered,
        RenderedLine::Paragraph {
            text: "oi".to_string()
        }
    );
    assert_eq!(rendered.text(), "oi");
    assert_eq!(rendered.to_html(), "<p>oi</p>");
}

#[test]
fn link_renders_as_anchor() {
    let rendered = render_line(&ContentLine::link("site.com")).unwrap();

    assert_eq!(rendered.text(), "site.com");
    assert_eq!(
        rendered.to_html(),
        "<p><a href=\"https://site.com\">site.com</a></p>"
    );
}

#[test]
fn link_without_address_keeps_placeholder_target() {
    let rendered = render_line(&ContentLine::link("#novoprojeto")).unwrap();
    assert_eq!(
        rendered,
        RenderedLine::Link {
            text: "#novoprojeto".to_string(),
            href: "#".to_string()
        }
    );
}

#[test]
fn unrecognized_lines_are_skipped_in_order() {
    let lines = vec![
        ContentLine::paragraph("um"),
        ContentLine {
            kind: ContentKind::Unrecognized,
            text: "ignorado".to_string(),
        },
        ContentLine::link("dois.com"),
    ];

    assert_eq!(render_line(&lines[1]), None);
    let texts: Vec<_> = render_content(&lines)
        .iter()
        .map(|line| line.text().to_string())
        .collect();
    assert_eq!(texts, vec!["um", "dois.com"]);
}

#[test]
fn html_output_escapes_text() {
    let rendered = render_line(&ContentLine::paragraph("<b>oi</b> & tchau")).unwrap();
    assert_eq!(rendered.to_html(), "<p>&lt;b&gt;oi&lt;/b&gt; &amp; tchau</p>");
}
