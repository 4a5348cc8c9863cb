/// Join class names, skipping blank entries.
///
/// ```
/// use ui::components::cn;
///
/// let active = true;
/// assert_eq!(cn(["btn", if active { "btn-active" } else { "" }, " "]), "btn btn-active");
/// ```
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::cn;

    #[test]
    fn skips_blank_parts() {
        assert_eq!(cn(["a", "", "  ", "b"]), "a b");
        assert_eq!(cn([]), "");
    }

    #[test]
    fn trims_each_part() {
        assert_eq!(cn([" rounded ", "p-4"]), "rounded p-4");
    }
}
