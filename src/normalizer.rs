/// Undo the common character swaps used to slip words past a filter, e.g.
/// `h3ll@` becomes `hella`. Nothing else about the text changes.
pub fn normalize(text: &str) -> String {
    text.chars().map(substitute).collect()
}

fn substitute(c: char) -> char {
    match c {
        '@' => 'a',
        '3' => 'e',
        '!' | '1' => 'i',
        '$' => 's',
        '0' => 'o',
        other => other,
    }
}
