use super::Pokemon;
use bson::oid::ObjectId;

/// One way of locating a record from a caller-supplied term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    ByNo,
    ById,
    ByName,
}

/// A term resolved for a single lookup strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    No(i64),
    Id(ObjectId),
    Name(String),
}

impl Lookup {
    /// Strategies in the order they are tried; the first hit wins.
    pub const ORDER: [Lookup; 3] = [Lookup::ByNo, Lookup::ById, Lookup::ByName];

    /// The key this strategy would query with, or `None` when the term does not fit it.
    pub fn key_for(self, term: &str) -> Option<LookupKey> {
        match self {
            Lookup::ByNo => parse_no(term).map(LookupKey::No),
            Lookup::ById => ObjectId::parse_str(term).ok().map(LookupKey::Id),
            Lookup::ByName => Some(LookupKey::Name(term.to_lowercase())),
        }
    }

    /// Keys for every applicable strategy, in lookup order.
    pub fn keys(term: &str) -> impl Iterator<Item = LookupKey> + '_ {
        Self::ORDER.into_iter().filter_map(move |l| l.key_for(term))
    }
}

/// A catalog number written any way a float parser accepts (`"25"`, `"25.0"`, `"2.5e1"`),
/// as long as it is finite, whole and fits in `i64`.
fn parse_no(term: &str) -> Option<i64> {
    let trimmed = term.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    let n = trimmed.parse::<f64>().ok()?;
    // i64::MIN is exactly -2^63; the upper bound 2^63 itself does not fit.
    if !n.is_finite() || n.fract() != 0.0 || n < i64::MIN as f64 || n >= 9_223_372_036_854_775_808.0 {
        return None;
    }
    Some(n as i64)
}

impl LookupKey {
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        match self {
            LookupKey::No(no) => pokemon.no == *no,
            LookupKey::Id(id) => pokemon.id == *id,
            LookupKey::Name(name) => pokemon.name == *name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_term_tries_number_then_name() {
        let keys: Vec<_> = Lookup::keys("25").collect();
        assert_eq!(keys, vec![LookupKey::No(25), LookupKey::Name("25".into())]);
    }

    #[test]
    fn object_id_term_tries_id_then_name() {
        let term = "64b7f0c2a1b2c3d4e5f60718";
        let keys: Vec<_> = Lookup::keys(term).collect();
        assert_eq!(
            keys,
            vec![
                LookupKey::Id(ObjectId::parse_str(term).unwrap()),
                LookupKey::Name(term.into()),
            ]
        );
    }

    #[test]
    fn all_digit_object_id_tries_every_strategy_in_order() {
        let term = "123456789012345678901234";
        let keys: Vec<_> = Lookup::keys(term).collect();
        // 24 digits overflow i64, so the numeric strategy does not apply.
        assert_eq!(keys.len(), 2);
        assert!(matches!(keys[0], LookupKey::Id(_)));

        let term = "000000000000000000000042";
        let keys: Vec<_> = Lookup::keys(term).collect();
        assert_eq!(keys[0], LookupKey::No(42));
        assert!(matches!(keys[1], LookupKey::Id(_)));
        assert_eq!(keys[2], LookupKey::Name(term.into()));
    }

    #[test]
    fn decimal_and_exponent_forms_are_numbers() {
        assert_eq!(Lookup::ByNo.key_for("1.0"), Some(LookupKey::No(1)));
        assert_eq!(Lookup::ByNo.key_for("1e1"), Some(LookupKey::No(10)));
        assert_eq!(Lookup::ByNo.key_for(" 01 "), Some(LookupKey::No(1)));
        assert_eq!(Lookup::ByNo.key_for("1.5"), None);
        assert_eq!(Lookup::ByNo.key_for("inf"), None);
        assert_eq!(Lookup::ByNo.key_for("NaN"), None);
        assert_eq!(Lookup::ByNo.key_for("1e30"), None);
    }

    #[test]
    fn name_term_is_lowercased() {
        assert_eq!(Lookup::ByName.key_for("PiKaChU"), Some(LookupKey::Name("pikachu".into())));
        assert_eq!(Lookup::ByNo.key_for("PiKaChU"), None);
        assert_eq!(Lookup::ById.key_for("PiKaChU"), None);
    }
}
