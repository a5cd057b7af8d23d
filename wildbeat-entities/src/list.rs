//! Lists that are persisted as a single comma separated text column.

pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|x| x.as_ref().trim())
        .filter(|x| !x.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
