//! Name inflection helpers used for foreign-key table guessing and log
//! labels.

/// Studly-cases a separated identifier (`order_item` -> `OrderItem`).
pub fn studly(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Pluralizes and studly-cases an identifier, pluralizing only the last
/// segment (`order_item` -> `OrderItems`).
pub fn plural_studly(name: &str) -> String {
    let mut segments: Vec<&str> = name
        .split(['_', '-', ' '])
        .filter(|segment| !segment.is_empty())
        .collect();
    let Some(last) = segments.pop() else {
        return String::new();
    };
    let mut out: String = segments.iter().map(|segment| capitalize(segment)).collect();
    out.push_str(&capitalize(&pluralize(last)));
    out
}

/// Singularizes and studly-cases a table name for log labels
/// (`user_posts` -> `UserPost`).
pub fn singular_studly(name: &str) -> String {
    singularize(&studly(name))
}

fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some(stem) = word.strip_suffix('y') {
        if !ends_with_vowel_before_y(&lower) {
            return format!("{stem}ies");
        }
    }
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

fn singularize(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if lower.ends_with("ses")
        || lower.ends_with("xes")
        || lower.ends_with("zes")
        || lower.ends_with("ches")
        || lower.ends_with("shes")
    {
        return word[..word.len() - 2].to_string();
    }
    // Words like "status" or "analysis" end in a bare `s` without being
    // plural; leave them alone.
    if lower.ends_with("us") || lower.ends_with("is") {
        return word.to_string();
    }
    if lower.ends_with('s') && !lower.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn ends_with_vowel_before_y(lower: &str) -> bool {
    let mut chars = lower.chars().rev();
    let Some('y') = chars.next() else {
        return false;
    };
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
