pub const LONG_FLAG_PREFIX: &str = "--";

/// Recovers the flag token to emit from a flag declaration.
///
/// Signatures list flags as `--long(-s)`; the short form wins when present. `--help(-h)`
/// becomes `--h`, `--verbose` stays `--verbose`, and a declaration without any
/// alphanumeric character collapses to the bare prefix.
pub fn recover_flag(declaration: &str) -> String {
    let remainder = declaration.trim_start_matches('-');
    let short = remainder
        .find("(-")
        .and_then(|start| first_alphanumeric_run(&remainder[start + 2..]));
    let token = short
        .or_else(|| first_alphanumeric_run(remainder))
        .unwrap_or_default();
    format!("{}{}", LONG_FLAG_PREFIX, token)
}

/// Returns the first maximal run of ASCII letters and digits in `text`.
fn first_alphanumeric_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_alphanumeric())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
