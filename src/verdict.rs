// src/verdict.rs

/// Reviewer outcome for a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// Status keyword as sent by the API.
    pub fn keyword(self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    /// Exact match only; the API always sends lowercase keywords.
    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.keyword() == s)
    }

    /// Display sentence with inline HTML emphasis.
    pub fn text(self) -> &'static str {
        match self {
            Verdict::Approved => "<b>Работа проверена:</b> ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "<b>Работа взята на проверку ревьюером.</b>",
            Verdict::Rejected => "<b>Работа проверена:</b> у ревьюера есть замечания.",
        }
    }
}
