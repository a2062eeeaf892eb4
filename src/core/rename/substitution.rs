use serde::{Deserialize, Serialize};

/// One literal (pattern, replacement) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: String,
}

impl Substitution {
    pub fn new(from: &str, to: &str, label: &str) -> Self {
        Substitution {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
        }
    }
}

/// An ordered list of substitutions, applied one after another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstitutionSet {
    pub substitutions: Vec<Substitution>,
}

impl SubstitutionSet {
    pub fn new(substitutions: Vec<Substitution>) -> Self {
        SubstitutionSet { substitutions }
    }

    /// Build the case variants of a term, in application order.
    ///
    /// From `setor` → `sector` this yields:
    /// - `setor` → `sector` (lowercase)
    /// - `Setor` → `Sector` (Capitalized)
    /// - `SETOR` → `SECTOR` (UPPER)
    pub fn case_variants(from: &str, to: &str) -> Self {
        let lower_from = from.to_lowercase();
        let lower_to = to.to_lowercase();

        let mut substitutions = vec![
            Substitution::new(&lower_from, &lower_to, "lowercase"),
            Substitution::new(&capitalize(&lower_from), &capitalize(&lower_to), "Capitalized"),
            Substitution::new(&from.to_uppercase(), &to.to_uppercase(), "UPPER"),
        ];

        // Single-character or caseless terms collapse into fewer distinct patterns
        let mut seen = Vec::new();
        substitutions.retain(|s| {
            if seen.contains(&s.from) {
                false
            } else {
                seen.push(s.from.clone());
                true
            }
        });

        SubstitutionSet { substitutions }
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.substitutions.iter()
    }

    /// Apply every substitution in order to the progressively-updated name.
    ///
    /// Each pass replaces all non-overlapping occurrences. Returns the new name
    /// and the total number of replacements.
    pub fn apply(&self, name: &str) -> (String, usize) {
        let mut current = name.to_string();
        let mut count = 0;

        for sub in &self.substitutions {
            if sub.from.is_empty() {
                continue;
            }
            let hits = current.matches(sub.from.as_str()).count();
            if hits > 0 {
                current = current.replace(sub.from.as_str(), &sub.to);
                count += hits;
            }
        }

        (current, count)
    }
}

impl Default for SubstitutionSet {
    fn default() -> Self {
        SubstitutionSet::case_variants("setor", "sector")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_works() {
        assert_eq!(capitalize("setor"), "Setor");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn default_set_is_setor_variants_in_order() {
        let set = SubstitutionSet::default();
        let pairs: Vec<(&str, &str)> = set
            .iter()
            .map(|s| (s.from.as_str(), s.to.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![("setor", "sector"), ("Setor", "Sector"), ("SETOR", "SECTOR")]
        );
    }

    #[test]
    fn case_variants_dedupe_caseless_terms() {
        let set = SubstitutionSet::case_variants("42", "43");
        assert_eq!(set.len(), 1);
        assert_eq!(set.substitutions[0].label, "lowercase");
    }

    #[test]
    fn apply_leaves_unrelated_names_alone() {
        let set = SubstitutionSet::default();
        let (name, count) = set.apply("quarterly_report.txt");
        assert_eq!(name, "quarterly_report.txt");
        assert_eq!(count, 0);
    }

    #[test]
    fn apply_replaces_each_case_variant() {
        let set = SubstitutionSet::default();

        assert_eq!(set.apply("setor_report.txt"), ("sector_report.txt".to_string(), 1));
        assert_eq!(set.apply("Setor_A"), ("Sector_A".to_string(), 1));
        assert_eq!(set.apply("SETOR.md"), ("SECTOR.md".to_string(), 1));
    }

    #[test]
    fn apply_replaces_all_occurrences_mixed_case() {
        let set = SubstitutionSet::default();
        let (name, count) = set.apply("setor-Setor-SETOR-setor");
        assert_eq!(name, "sector-Sector-SECTOR-sector");
        assert_eq!(count, 4);
    }

    #[test]
    fn apply_ignores_other_casings() {
        let set = SubstitutionSet::default();
        let (name, count) = set.apply("sEtOr_SeToR");
        assert_eq!(name, "sEtOr_SeToR");
        assert_eq!(count, 0);
    }

    #[test]
    fn apply_does_not_touch_already_corrected_names() {
        let set = SubstitutionSet::default();
        let (name, count) = set.apply("sector_Sector_SECTOR");
        assert_eq!(name, "sector_Sector_SECTOR");
        assert_eq!(count, 0);
    }

    #[test]
    fn apply_is_sequential_on_updated_name() {
        let set = SubstitutionSet::new(vec![
            Substitution::new("ab", "b", "first"),
            Substitution::new("bb", "X", "second"),
        ]);
        // "abb" -> "bb" -> "X": the second pair sees the first pair's output
        assert_eq!(set.apply("abb"), ("X".to_string(), 2));
    }

    #[test]
    fn apply_skips_empty_patterns() {
        let set = SubstitutionSet::new(vec![Substitution::new("", "x", "empty")]);
        assert_eq!(set.apply("name"), ("name".to_string(), 0));
    }

    #[test]
    fn set_deserializes_from_plain_array() {
        let set: SubstitutionSet =
            serde_json::from_str(r#"[{"from":"colour","to":"color"}]"#).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.substitutions[0].label, "");
    }
}
