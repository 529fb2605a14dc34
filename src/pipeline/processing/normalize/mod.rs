use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));
static UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").expect("valid regex"));

/// Converts a district label to snake_case: trimmed, lowercased, every run of
/// non-alphanumeric characters replaced by one underscore, no leading or
/// trailing underscore. Idempotent.
pub fn to_snake(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let replaced = NON_ALNUM.replace_all(&lowered, "_");
    let squashed = UNDERSCORE_RUN.replace_all(&replaced, "_");
    squashed.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_snake(s: &str) -> bool {
        Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").unwrap().is_match(s)
    }

    #[test]
    fn test_senate_label() {
        assert_eq!(to_snake(" 12th Senate District! "), "12th_senate_district");
    }

    #[test]
    fn test_runs_and_edges() {
        assert_eq!(to_snake("__A -- B__"), "a_b");
        assert_eq!(to_snake("SENATE\tDISTRICT\n7"), "senate_district_7");
        assert_eq!(to_snake("!!!"), "");
        assert_eq!(to_snake(""), "");
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(to_snake("Distrito Señor 3"), "distrito_se_or_3");
    }

    #[test]
    fn test_idempotent_and_well_formed() {
        let inputs = [
            " 12th Senate District! ",
            "already_snake",
            "  MiXeD--case__LABEL  ",
            "___",
            "Ünïcödé 4",
            "a_b_",
        ];
        for input in inputs {
            let once = to_snake(input);
            assert_eq!(to_snake(&once), once, "input {:?}", input);
            assert!(once.is_empty() || is_snake(&once), "output {:?}", once);
        }
    }
}
