// Version ordering.
//
// Only the common prefix of the two component lists is compared. A version
// that runs out of components is equal to the longer one, so v5 == v5.1 and
// v5 == v5.2 while v5.1 < v5.2. Equality is not transitive, that is why
// Version does not implement PartialOrd.

use std::cmp::Ordering;

use crate::value::Version;

impl Version {
    pub fn ordering(&self, other: &Version) -> Ordering {
        std::iter::zip(&self.components, &other.components)
            .map(|(left, right)| left.cmp(right))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// -1 if older than `other`, 0 if equivalent, 1 if newer
    pub fn compare(&self, other: &Version) -> i32 {
        match self.ordering(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self.ordering(other).is_lt()
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        self.ordering(other).is_gt()
    }

    /// Not identity: "v5.34" is equal to both "v5.34.0" and "v5.34.1".
    pub fn equal(&self, other: &Version) -> bool {
        self.ordering(other).is_eq()
    }

    pub fn not_equal(&self, other: &Version) -> bool {
        self.ordering(other).is_ne()
    }

    pub fn less_than_or_equal(&self, other: &Version) -> bool {
        self.ordering(other).is_le()
    }

    pub fn greater_than_or_equal(&self, other: &Version) -> bool {
        self.ordering(other).is_ge()
    }

    /// A total order for sorting.
    ///
    /// Agrees with [`Version::ordering`] whenever that is not `Equal`. A
    /// shorter component list sorts before a longer one it is a prefix of,
    /// identical lists fall back to the original text.
    pub fn total_cmp(&self, other: &Version) -> Ordering {
        self.components
            .cmp(&other.components)
            .then_with(|| self.original.cmp(&other.original))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    // built directly, an empty list is only reachable through a decoded record
    fn v(components: &[i64]) -> Version {
        Version {
            original: "test".to_string(),
            alpha: false,
            qv: false,
            components: components.to_vec(),
        }
    }

    #[test]
    fn prefix_equality_is_not_transitive() {
        let five = v(&[5]);
        let five_one = v(&[5, 1]);
        let five_two = v(&[5, 2]);

        assert!(five.equal(&five_one));
        assert!(five_one.equal(&five));
        assert!(five.equal(&five_two));
        assert!(five_two.equal(&five));
        assert!(five_one.not_equal(&five_two));
        assert!(five_one.less_than(&five_two));
        assert!(five_two.greater_than(&five_one));
    }

    #[test]
    fn three_way() {
        assert_eq!(v(&[1, 2]).compare(&v(&[1, 3])), -1);
        assert_eq!(v(&[1, 3]).compare(&v(&[1, 2])), 1);
        assert_eq!(v(&[1, 2]).compare(&v(&[1, 2, 9])), 0);
        assert_eq!(v(&[]).compare(&v(&[1])), 0);
    }

    // every relation for every pair of "undef", "v1.2.3", "0" and "v1.2.3_0"
    #[test]
    fn relations() {
        let undef = parse("undef").unwrap();
        let standard = parse("v1.2.3").unwrap();
        let zero = parse("0").unwrap();
        let alpha = parse("v1.2.3_0").unwrap();

        // (left, right, expected ordering)
        let cases = [
            (&zero, &zero, Ordering::Equal),
            (&zero, &standard, Ordering::Less),
            (&zero, &alpha, Ordering::Less),
            (&zero, &undef, Ordering::Equal),
            (&standard, &zero, Ordering::Greater),
            (&standard, &standard, Ordering::Equal),
            (&standard, &alpha, Ordering::Less),
            (&standard, &undef, Ordering::Greater),
            (&undef, &zero, Ordering::Equal),
            (&undef, &standard, Ordering::Less),
            (&undef, &undef, Ordering::Equal),
            (&undef, &alpha, Ordering::Less),
            (&alpha, &alpha, Ordering::Equal),
            (&alpha, &undef, Ordering::Greater),
            (&alpha, &zero, Ordering::Greater),
            (&alpha, &standard, Ordering::Greater),
        ];

        for (left, right, expected) in cases {
            let name = format!("{} vs {}", left.raw(), right.raw());
            assert_eq!(left.ordering(right), expected, "{name}");
            assert_eq!(left.less_than(right), expected == Ordering::Less, "{name}");
            assert_eq!(left.greater_than(right), expected == Ordering::Greater, "{name}");
            assert_eq!(left.equal(right), expected == Ordering::Equal, "{name}");
            assert_eq!(left.not_equal(right), expected != Ordering::Equal, "{name}");
            assert_eq!(left.less_than_or_equal(right), expected != Ordering::Greater, "{name}");
            assert_eq!(left.greater_than_or_equal(right), expected != Ordering::Less, "{name}");
        }
    }

    #[test]
    fn decimal_and_dotted() {
        let decimal = parse("1.2").unwrap();
        let dotted = parse("1.2.3").unwrap();
        // 1.2 is v1.200, far above v1.2.3
        assert!(decimal.greater_than(&dotted));
        assert!(parse("1.002003").unwrap().equal(&dotted));
    }

    #[test]
    fn total_order_refines_prefix_order() {
        let mut versions: Vec<Version> = ["v5.2", "5", "v5.1", "5.0", "4.999", "undef"]
            .into_iter()
            .map(|s| parse(s).unwrap())
            .collect();
        versions.sort_by(Version::total_cmp);
        let raws: Vec<&str> = versions.iter().map(Version::raw).collect();
        assert_eq!(raws, ["undef", "4.999", "5", "5.0", "v5.1", "v5.2"]);

        for pair in versions.windows(2) {
            assert!(pair[0].less_than_or_equal(&pair[1]));
        }
    }
}
