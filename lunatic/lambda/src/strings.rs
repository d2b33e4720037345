//! Text helpers.

const ESC: &str = "\x1b";

/// Lowercases and trims.
pub fn lower_case(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes every word. Each whitespace character is a separator and is
/// replaced by a single space.
pub fn title(s: &str) -> String {
    s.split(char::is_whitespace)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trims every line. Lines are rejoined with `\n`.
pub fn trim_lines(s: &str) -> String {
    s.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

/// Splits on `\r\n` or `\n`.
pub fn split_lines(s: &str) -> Vec<&str> {
    s.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Turns each escaped backslash pair (`\\`) into an ESC control character.
pub fn escape_double_backslashes(s: &str) -> String {
    s.replace("\\\\", ESC)
}

/// Turns every backslash into an ESC control character.
pub fn escape_backslashes(s: &str) -> String {
    s.replace('\\', ESC)
}

/// Removes line breaks, including the literal two-escape text `\n\r`.
pub fn remove_lines(s: &str) -> String {
    s.replace("\\n\\r", "").replace('\n', "")
}

/// Collapses every run of two or more whitespace characters into one space.
pub fn mono_space(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = String::new();
    for c in s.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        flush_run(&mut out, &mut run);
        out.push(c);
    }
    flush_run(&mut out, &mut run);
    out
}

fn flush_run(out: &mut String, run: &mut String) {
    if run.chars().nth(1).is_some() {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}

/// Number of whitespace characters before the first non-whitespace one.
pub fn leading_spaces(s: &str) -> usize {
    s.chars().take_while(|c| c.is_whitespace()).count()
}

/// Number of ASCII space characters.
pub fn space_count(s: &str) -> usize {
    s.matches(' ').count()
}

/// Loose boolean reading: any case-insensitive occurrence of "true" wins,
/// everything else is false.
pub fn to_boolean(s: &str) -> bool {
    s.to_lowercase().contains("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_case_trims() {
        assert_eq!(lower_case("  HeLLo World \n"), "hello world");
    }

    #[test]
    fn capitalize_first_only() {
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("émile"), "Émile");
    }

    #[test]
    fn title_each_word() {
        assert_eq!(title("the quick  fox"), "The Quick  Fox");
        assert_eq!(title("a\tb"), "A B");
    }

    #[test]
    fn trim_and_split_lines() {
        assert_eq!(trim_lines("  a \r\n b\n c  "), "a\nb\nc");
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }

    #[test]
    fn counts() {
        assert_eq!(word_count("  one two\tthree \n four "), 4);
        assert_eq!(word_count("   "), 0);
        assert_eq!(space_count("a b  c"), 3);
        assert_eq!(leading_spaces("   x y"), 3);
        assert_eq!(leading_spaces("    "), 4);
    }

    #[test]
    fn escapes() {
        assert_eq!(escape_double_backslashes(r"\\C[2]red\\C[0]"), "\x1bC[2]red\x1bC[0]");
        assert_eq!(escape_backslashes(r"\V[1]"), "\x1bV[1]");
    }

    #[test]
    fn remove_lines_both_forms() {
        assert_eq!(remove_lines("a\nb\\n\\rc"), "abc");
    }

    #[test]
    fn mono_space_runs() {
        assert_eq!(mono_space("a  b\t\tc d"), "a b c d");
        assert_eq!(mono_space("a\tb"), "a\tb");
        assert_eq!(mono_space("trailing   "), "trailing ");
    }

    #[test]
    fn loose_boolean() {
        assert!(to_boolean("TRUE"));
        assert!(to_boolean("is true"));
        assert!(!to_boolean("false"));
        assert!(!to_boolean("yes"));
    }
}
