use std::fmt::Write as _;

use crate::registration::FieldErrors;

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Single-line input with its label and, if present, the field's error.
pub(crate) fn text_field(
    html: &mut String,
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    errors: &FieldErrors,
) {
    writeln!(
        html,
        "<div class=\"field\"><label for=\"{name}\">{label}</label><input type=\"{input_type}\" id=\"{name}\" name=\"{name}\" value=\"{}\">",
        escape_html(value)
    )
    .expect("write input");
    field_error(html, name, errors);
    html.push_str("</div>\n");
}

pub(crate) fn text_area(
    html: &mut String,
    name: &str,
    label: &str,
    value: &str,
    errors: &FieldErrors,
) {
    writeln!(
        html,
        "<div class=\"field\"><label for=\"{name}\">{label}</label><textarea id=\"{name}\" name=\"{name}\" rows=\"4\">{}</textarea>",
        escape_html(value)
    )
    .expect("write textarea");
    field_error(html, name, errors);
    html.push_str("</div>\n");
}

pub(crate) fn field_error(html: &mut String, name: &str, errors: &FieldErrors) {
    if let Some(message) = errors.get(name) {
        writeln!(
            html,
            "<p class=\"field-error\" data-field=\"{name}\">{}</p>",
            escape_html(message)
        )
        .expect("write field error");
    }
}
