use crate::value::Version;

impl Version {
    /// `v` followed by at least three dot separated components: "1.2" -> "v1.200.0"
    pub fn normal(&self) -> String {
        let mut components = self.components.clone();
        if components.len() < 3 {
            components.resize(3, 0);
        }
        let parts: Vec<String> = components.iter().map(i64::to_string).collect();
        format!("v{}", parts.join("."))
    }

    /// The version as one number: "v1.2.3" -> 1.002003
    ///
    /// Every component after the first becomes three decimal places (more if
    /// it is wider). Long versions lose precision, use the comparison methods
    /// to order versions.
    pub fn numify(&self) -> f64 {
        match self.components.as_slice() {
            [] => 0.0,
            [only] => *only as f64,
            [first, rest @ ..] => {
                let fraction: String = rest.iter().map(|c| format!("{c:03}")).collect();
                format!("{first}.{fraction}").parse().unwrap_or(0.0)
            }
        }
    }

    /// The original text, even for the undefined version.
    pub fn raw(&self) -> &str {
        &self.original
    }
}

/// The original text, except that the undefined version prints as "0".
impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_undefined() {
            return f.write_str("0");
        }
        f.write_str(&self.original)
    }
}
