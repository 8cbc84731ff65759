// src/content/slug.rs

/// Turns a title into a URL-safe slug: lowercase ASCII letters and digits,
/// with every run of other characters collapsed to a single hyphen and no
/// hyphen at either end.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_spaces_collapse() {
        assert_eq!(slugify("10 Tips for Buyers!!"), "10-tips-for-buyers");
        assert_eq!(slugify("  Modern   Loft -- Downtown "), "modern-loft-downtown");
    }

    #[test]
    fn no_leading_or_trailing_hyphens() {
        assert_eq!(slugify("!!!Sunset Villa???"), "sunset-villa");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(slugify("Café Über Straße"), "caf-ber-stra-e");
    }

    #[test]
    fn output_only_uses_the_slug_alphabet() {
        let titles = [
            "3BR/2BA Townhouse @ Lakeview",
            "What's New in 2025? (Part 2)",
            "ALL CAPS & symbols #1",
        ];
        for title in titles {
            let slug = slugify(title);
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }
}
