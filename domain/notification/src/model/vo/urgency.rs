/// How intrusive an alert should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    High,
    Default,
    Low,
}

impl Urgency {
    /// Map a free-form priority string, in English or French.
    pub fn from_priority(priority: &str) -> Self {
        match priority.trim().to_lowercase().as_str() {
            "high" | "haute" | "urgent" => Urgency::High,
            "medium" | "moyenne" | "normal" => Urgency::Default,
            "low" | "basse" | "faible" => Urgency::Low,
            _ => Urgency::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "critical",
            Urgency::Default => "normal",
            Urgency::Low => "low",
        }
    }
}
