use crate::StyleLoadError;

/// Given a string in our style format, iterate over names and values.
pub(crate) fn iter_items(s: &str) -> impl Iterator<Item = Result<(&str, &str), StyleLoadError>> {
    s.lines().filter_map(|line| {
        let line = line.split("//").next().unwrap_or(line);
        if line.trim().is_empty() {
            None
        } else {
            let mut split = line.splitn(2, ':');
            match (split.next(), split.next()) {
                (Some(name), Some(val)) if is_variable_name(name.trim()) => {
                    let val = val.trim();
                    let val = val.strip_suffix(';').unwrap_or(val).trim_end();
                    Some(Ok((name.trim(), val)))
                }
                _ => Some(Err(StyleLoadError::ParseLineError(line.to_string()))),
            }
        }
    })
}

/// Custom property names: two dashes, then letters, digits, dashes or underscores.
fn is_variable_name(name: &str) -> bool {
    match name.strip_prefix("--") {
        Some(rest) => {
            !rest.is_empty()
                && rest
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        None => false,
    }
}
