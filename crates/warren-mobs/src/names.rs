//! Mob name generation from prefix and suffix fragments.
//!
//! A name is one random prefix glued to one random suffix, capitalized:
//! `"gnar" + "tok"` becomes `"Gnartok"`. Names are not unique; two mobs may
//! well share one.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::NameError;

/// Prefix fragments used when no custom table is configured.
pub const DEFAULT_PREFIXES: &[&str] = &[
    "naz", "mor", "gnar", "aahr", "more", "dark", "bam", "raab", "rake", "lor", "smur",
];

/// Suffix fragments used when no custom table is configured.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "guz", "kill", "gul", "gok", "tan", "tok", "bul", "zod", "zed", "dor", "grim", "yohn", "fan",
];

/// Combines random fragments into capitalized mob names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGenerator {
    /// Leading fragments.
    prefixes: Vec<String>,
    /// Trailing fragments.
    suffixes: Vec<String>,
}

impl NameGenerator {
    /// Build a generator from fragment tables.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::EmptyFragments`] if either table is empty.
    pub fn new(prefixes: Vec<String>, suffixes: Vec<String>) -> Result<Self, NameError> {
        if prefixes.is_empty() {
            return Err(NameError::EmptyFragments { which: "prefix" });
        }
        if suffixes.is_empty() {
            return Err(NameError::EmptyFragments { which: "suffix" });
        }
        Ok(Self { prefixes, suffixes })
    }

    /// Prefix table.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Suffix table.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Draw one prefix and one suffix uniformly and capitalize the result.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let prefix = self.prefixes.choose(rng).map_or("", String::as_str);
        let suffix = self.suffixes.choose(rng).map_or("", String::as_str);
        capitalize(&format!("{prefix}{suffix}"))
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES.iter().map(|s| (*s).to_owned()).collect(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut name: String = first.to_uppercase().collect();
    name.extend(chars.flat_map(char::to_lowercase));
    name
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn is_well_formed(name: &str) -> bool {
        let mut chars = name.chars();
        chars.next().is_some_and(char::is_uppercase) && chars.all(char::is_lowercase)
    }

    #[test]
    fn capitalize_variants() {
        assert_eq!(capitalize("gnartok"), "Gnartok");
        assert_eq!(capitalize("DARKZED"), "Darkzed");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn default_names_are_prefix_plus_suffix() {
        let generator = NameGenerator::default();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let name = generator.generate(&mut rng);
            assert!(is_well_formed(&name), "badly formed name {name}");
            let lower = name.to_lowercase();
            let matched = DEFAULT_PREFIXES.iter().any(|p| {
                lower
                    .strip_prefix(p)
                    .is_some_and(|rest| DEFAULT_SUFFIXES.contains(&rest))
            });
            assert!(matched, "{name} is not a prefix+suffix combination");
        }
    }

    #[test]
    fn single_fragment_tables_are_deterministic() {
        let generator =
            NameGenerator::new(vec!["smur".to_owned()], vec!["fan".to_owned()]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(generator.generate(&mut rng), "Smurfan");
        assert_eq!(generator.generate(&mut rng), "Smurfan");
    }

    #[test]
    fn same_seed_same_names() {
        let generator = NameGenerator::default();
        let mut a = SmallRng::seed_from_u64(99);
        let mut b = SmallRng::seed_from_u64(99);
        let first: Vec<String> = (0..10).map(|_| generator.generate(&mut a)).collect();
        let second: Vec<String> = (0..10).map(|_| generator.generate(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_tables_rejected() {
        assert_eq!(
            NameGenerator::new(Vec::new(), vec!["tok".to_owned()]),
            Err(NameError::EmptyFragments { which: "prefix" })
        );
        assert_eq!(
            NameGenerator::new(vec!["lor".to_owned()], Vec::new()),
            Err(NameError::EmptyFragments { which: "suffix" })
        );
    }
}
