use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsultationStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl ConsultationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "pending",
            ConsultationStatus::Processing => "processing",
            ConsultationStatus::Completed => "completed",
            ConsultationStatus::Failed => "failed",
        }
    }

    /// Terminal states are never left by the processor.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ConsultationStatus::Completed | ConsultationStatus::Failed
        )
    }
}

impl FromStr for ConsultationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ConsultationStatus::Pending),
            "processing" => Ok(ConsultationStatus::Processing),
            "completed" => Ok(ConsultationStatus::Completed),
            "failed" => Ok(ConsultationStatus::Failed),
            _ => Err(format!("Invalid consultation status: {}", s)),
        }
    }
}

impl fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
