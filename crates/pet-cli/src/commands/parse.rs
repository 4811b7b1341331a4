/// Flatten comma separated arguments into single values.
///
/// Each item is trimmed and empty items are dropped, so `"a, b,,c"` yields
/// `["a", "b", "c"]`.
pub fn split_csv<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.as_ref().split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
