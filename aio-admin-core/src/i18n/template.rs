//! `${name}` placeholder substitution

/// Replace every `${name}` in `template` with the matching value.
///
/// Names are one or more ASCII word characters (`[A-Za-z0-9_]`). Anything
/// else after `${` is copied through unchanged, as is an unterminated `${`.
/// Placeholders without a value render as their bare name.
pub fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("${") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();

        if len == 0 || after.as_bytes().get(len) != Some(&b'}') {
            out.push_str("${");
            rest = after;
            continue;
        }

        let name = &after[..len];
        let value = params
            .iter()
            .find(|(k, _)| *k == name)
            .map_or(name, |(_, v)| *v);
        out.push_str(value);
        rest = &after[len + 1..];
    }

    out.push_str(rest);
    out
}
