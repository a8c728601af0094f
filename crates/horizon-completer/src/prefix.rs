//! Longest common prefix of a set of completion values.

/// Longest leading substring shared by every value.
///
/// Returns an empty string for fewer than two values, since a single
/// candidate has no meaningful "subset". Comparison is plain `char` equality,
/// with no locale or case folding.
///
/// ```
/// use horizon_completer::common_prefix;
///
/// assert_eq!(common_prefix(&["foobar", "foobaz", "foo"]), "foo");
/// assert_eq!(common_prefix(&["x"]), "");
/// ```
pub fn common_prefix<S: AsRef<str>>(values: &[S]) -> String {
    let [first, rest @ ..] = values else {
        return String::new();
    };
    if rest.is_empty() {
        return String::new();
    }

    let mut others: Vec<_> = rest.iter().map(|value| value.as_ref().chars()).collect();
    let mut prefix = String::new();
    for ch in first.as_ref().chars() {
        if !others.iter_mut().all(|other| other.next() == Some(ch)) {
            break;
        }
        prefix.push(ch);
    }
    prefix
}
