//! Structured result of resolving one player action.
//!
//! Narration is produced elsewhere from these values; the rendered text form
//! ("Success", "Failure: ...", "Victory: ...") is the compatibility surface the
//! narrator and the trackers consume.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutcomeStatus {
    Success,
    /// Nothing for the rules to do; the narrator handles it.
    AutomaticSuccess,
    Failure,
    Victory,
    Defeat,
    /// Combat suspended on the player's turn.
    Ongoing,
}

impl OutcomeStatus {
    /// Leading word of the rendered status line, if the status has one.
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some("Success"),
            Self::AutomaticSuccess => Some("Automatic Success"),
            Self::Failure => Some("Failure"),
            Self::Victory => Some("Victory"),
            Self::Defeat => Some("Defeat"),
            Self::Ongoing => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub status: OutcomeStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub detail: Option<String>,
    /// Lines produced while resolving, oldest first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub narration: Vec<String>,
    /// Full name of the entity the action resolved to (e.g. the item taken).
    #[cfg_attr(feature = "serde", serde(default))]
    pub subject: Option<String>,
}

impl Outcome {
    pub fn new(status: OutcomeStatus) -> Self {
        Self {
            status,
            detail: None,
            narration: Vec::new(),
            subject: None,
        }
    }

    pub fn success() -> Self {
        Self::new(OutcomeStatus::Success)
    }

    pub fn success_with(detail: impl Into<String>) -> Self {
        Self::success().with_detail(detail)
    }

    pub fn automatic() -> Self {
        Self::new(OutcomeStatus::AutomaticSuccess)
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::new(OutcomeStatus::Failure).with_detail(reason)
    }

    pub fn victory(detail: impl Into<String>) -> Self {
        Self::new(OutcomeStatus::Victory).with_detail(detail)
    }

    pub fn defeat(detail: impl Into<String>) -> Self {
        Self::new(OutcomeStatus::Defeat).with_detail(detail)
    }

    pub fn ongoing() -> Self {
        Self::new(OutcomeStatus::Ongoing)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_narration(mut self, lines: Vec<String>) -> Self {
        self.narration = lines;
        self
    }

    /// Victory, any success, or an automatic success.
    pub fn is_success(&self) -> bool {
        matches!(
            self.status,
            OutcomeStatus::Success | OutcomeStatus::AutomaticSuccess | OutcomeStatus::Victory
        )
    }

    pub fn is_failure(&self) -> bool {
        self.status == OutcomeStatus::Failure
    }

    /// The status line alone, e.g. `Failure: You do not have a 'rope'.`
    pub fn status_line(&self) -> String {
        match (self.status.label(), self.detail.as_deref()) {
            (Some(label), Some(detail)) => format!("{label}: {detail}"),
            (Some(label), None) => label.to_string(),
            (None, detail) => detail.unwrap_or_default().to_string(),
        }
    }

    /// Classifies an externally produced outcome string.
    ///
    /// The last line carrying a known status word wins; earlier lines become
    /// narration. Text with no status word reads as an ongoing exchange.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        for (index, line) in lines.iter().enumerate().rev() {
            if let Some((status, detail)) = parse_status_line(line) {
                let mut outcome = Self::new(status);
                outcome.detail = detail;
                outcome.narration = lines[..index].iter().map(|l| l.to_string()).collect();
                return outcome;
            }
        }
        Self::ongoing().with_narration(lines.iter().map(|l| l.to_string()).collect())
    }
}

fn parse_status_line(line: &str) -> Option<(OutcomeStatus, Option<String>)> {
    const ORDER: [OutcomeStatus; 5] = [
        OutcomeStatus::AutomaticSuccess,
        OutcomeStatus::Success,
        OutcomeStatus::Failure,
        OutcomeStatus::Victory,
        OutcomeStatus::Defeat,
    ];
    let line = line.trim();
    ORDER.into_iter().find_map(|status| {
        let label = status.label()?;
        let rest = line.strip_prefix(label)?;
        if rest.is_empty() {
            return Some((status, None));
        }
        let detail = rest.strip_prefix(':')?.trim();
        Some((status, (!detail.is_empty()).then(|| detail.to_string())))
    })
}

impl fmt::Display for Outcome {
    /// Narration lines followed by the status line, newline separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status_line();
        let mut first = true;
        for line in self
            .narration
            .iter()
            .map(String::as_str)
            .chain((!status.is_empty()).then_some(status.as_str()))
        {
            if !first {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
            first = false;
        }
        Ok(())
    }
}
