//! SVG element formatters.
//!
//! Each function returns one markup fragment. Coordinates are not checked.

use std::borrow::Cow;

/// Escape text for use inside an SVG element or attribute value.
pub fn escape_text(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="2" />"#,
        x1, y1, x2, y2
    )
}

pub fn circle(cx: f64, cy: f64, r: f64) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="white" stroke="black" stroke-width="2" />"#,
        cx, cy, r
    )
}

/// Centered text label; `content` is escaped.
pub fn text(x: f64, y: f64, content: &str, size: u32) -> String {
    format!(
        r#"<text x="{}" y="{}" font-family="Verdana" font-size="{}" fill="black" text-anchor="middle">{}</text>"#,
        x,
        y,
        size,
        escape_text(content)
    )
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="white" stroke="black" stroke-width="2" />"#,
        x, y, width, height
    )
}

/// Rotate `el` by `angle` degrees around (`cx`, `cy`).
pub fn rotate(el: &str, angle: f64, cx: f64, cy: f64) -> String {
    format!(r#"<g transform="rotate({} {} {})">{}</g>"#, angle, cx, cy, el)
}

pub fn translate(el: &str, dx: f64, dy: f64) -> String {
    format!(r#"<g transform="translate({} {})">{}</g>"#, dx, dy, el)
}

pub fn scale(el: &str, sx: f64, sy: f64) -> String {
    format!(r#"<g transform="scale({} {})">{}</g>"#, sx, sy, el)
}

/// Standalone `<svg>` document wrapping `elements` in order.
pub fn svg<S: AsRef<str>>(width: f64, height: f64, elements: &[S]) -> String {
    let body: String = elements.iter().map(|e| e.as_ref()).collect();
    format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">{}</svg>"#,
        width, height, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line() {
        assert_eq!(
            line(0.0, 1.0, 10.0, 2.5),
            r#"<line x1="0" y1="1" x2="10" y2="2.5" stroke="black" stroke-width="2" />"#
        );
    }

    #[test]
    fn test_circle() {
        assert_eq!(
            circle(5.0, 5.0, 3.0),
            r#"<circle cx="5" cy="5" r="3" fill="white" stroke="black" stroke-width="2" />"#
        );
    }

    #[test]
    fn test_rect() {
        assert_eq!(
            rect(25.0, 50.0, 50.0, 200.0),
            r#"<rect x="25" y="50" width="50" height="200" fill="white" stroke="black" stroke-width="2" />"#
        );
    }

    #[test]
    fn test_text_escapes_content() {
        let out = text(400.0, 30.0, "Tom & <Jerry>", 24);
        assert_eq!(
            out,
            r#"<text x="400" y="30" font-family="Verdana" font-size="24" fill="black" text-anchor="middle">Tom &amp; &lt;Jerry&gt;</text>"#
        );
    }

    #[test]
    fn test_escape_text_covers_quotes() {
        assert_eq!(escape_text(r#"a"b'c"#), "a&quot;b&apos;c");
        assert!(matches!(escape_text("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_transforms_wrap_element() {
        let el = "<x/>";
        assert_eq!(rotate(el, 45.0, 1.0, 2.0), r#"<g transform="rotate(45 1 2)"><x/></g>"#);
        assert_eq!(translate(el, -3.0, 4.0), r#"<g transform="translate(-3 4)"><x/></g>"#);
        assert_eq!(scale(el, 0.5, 2.0), r#"<g transform="scale(0.5 2)"><x/></g>"#);
    }

    #[test]
    fn test_svg_container() {
        let out = svg(800.0, 400.0, &["<a/>", "<b/>"]);
        assert_eq!(
            out,
            r#"<svg width="800" height="400" xmlns="http://www.w3.org/2000/svg"><a/><b/></svg>"#
        );
    }

    #[test]
    fn test_svg_empty() {
        let out = svg::<String>(10.0, 10.0, &[]);
        assert!(out.ends_with("></svg>"));
    }
}
