use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-text match event tagged with the match minute it happened in.
///
/// The minute is kept as a string so stoppage time such as `"90+3"` can be
/// recorded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    time: String,
    text: String,
}

impl Update {
    pub fn new(time: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            text: text.into(),
        }
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.time, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_display() {
        let update = Update::new("70", "Goal by Pablo Gavi.");
        assert_eq!(update.to_string(), "70: Goal by Pablo Gavi.");
    }

    #[test]
    fn test_update_keeps_stoppage_time_marker() {
        let update = Update::new("90+3", "Yellow card for Casemiro.");
        assert_eq!(update.time(), "90+3");
        assert_eq!(update.text(), "Yellow card for Casemiro.");
        assert_eq!(update.to_string(), "90+3: Yellow card for Casemiro.");
    }
}
