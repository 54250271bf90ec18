//! Identifier casing and HTML entity decoding for attribute and text values.

// ── Casing ────────────────────────────────────────────────────────────────

/// camelCase an attribute or tag name: `-`, `_` and whitespace act as word
/// separators, interior capitalization is preserved, and the first character
/// is lowered.
///
/// `background-color` → `backgroundColor`, `main_axis` → `mainAxis`,
/// `MyWidget` → `myWidget`.
pub(crate) fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for ch in s.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            if !out.is_empty() {
                upper_next = true;
            }
            continue;
        }
        if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// PascalCase form used for widget class names: camelCase with the first
/// character raised. `raised-button` → `RaisedButton`.
pub(crate) fn pascal_case(s: &str) -> String {
    let camel = camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        None => camel,
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

// ── Entity decoding ───────────────────────────────────────────────────────

/// Decode the HTML entities the template pipeline emits: the five named
/// escapes plus `&nbsp;` and decimal/hex numeric references. Anything
/// unrecognized passes through verbatim.
pub(crate) fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match decode_entity(tail) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode one entity at the start of `s` (which begins with `&`), returning
/// the character and the byte length consumed, or `None` to leave the `&` as
/// literal text.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let semi = s.find(';')?;
    let body = &s[1..semi];
    let ch = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let code = body.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)?
        }
    };
    Some((ch, semi + 1))
}
