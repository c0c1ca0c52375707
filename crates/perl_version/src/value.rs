/// A parsed version.
///
/// Values are built by [`crate::parse`] (or [`Version::undefined`]) and never
/// change afterwards. `PartialEq` compares the fields as stored, it is *not*
/// version equality, see [`Version::equal`] for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub(crate) original: String,
    pub(crate) alpha: bool,
    pub(crate) qv: bool,
    pub(crate) components: Vec<i64>,
}

pub(crate) const UNDEF: &str = "undef";

impl Version {
    pub(crate) fn new(original: &str, alpha: bool, qv: bool, components: Vec<i64>) -> Self {
        debug_assert!(!components.is_empty());
        Self {
            original: original.to_string(),
            alpha,
            qv,
            components,
        }
    }

    /// The undefined version, equal to "0"
    pub fn undefined() -> Self {
        Self::new(UNDEF, false, false, vec![0])
    }

    pub fn is_undefined(&self) -> bool {
        self.original == UNDEF
    }

    /// true for versions with an underscore part, "1.02_03" or "v1.2_3"
    pub fn is_alpha(&self) -> bool {
        self.alpha
    }

    /// true for dotted versions: "v1.2", "1.2.3", ".1.2"
    ///
    /// "1.2.3" is qv and means v1.2.3, while the decimal "1.2" means v1.200.0.
    pub fn is_qv(&self) -> bool {
        self.qv
    }

    /// major first
    pub fn components(&self) -> &[i64] {
        &self.components
    }

    /// the text this version was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined() {
        let v = Version::undefined();
        assert_eq!(v.original(), "undef");
        assert!(!v.is_alpha());
        assert!(!v.is_qv());
        assert_eq!(v.components(), &[0]);
        assert!(v.is_undefined());
    }

    #[test]
    fn fields_are_kept() {
        let v = Version::new("v1.2_3", true, true, vec![1, 23, 0]);
        assert_eq!(v.original(), "v1.2_3");
        assert!(v.is_alpha());
        assert!(v.is_qv());
        assert_eq!(v.components(), &[1, 23, 0]);
        assert!(!v.is_undefined());
    }
}
