use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeState {
    Empty,
    Validated,
    Extracting,
    Ready,
    Confirmed,
}

impl IntakeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeState::Empty => "EMPTY",
            IntakeState::Validated => "VALIDATED",
            IntakeState::Extracting => "EXTRACTING",
            IntakeState::Ready => "READY",
            IntakeState::Confirmed => "CONFIRMED",
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, IntakeState::Validated | IntakeState::Extracting)
    }
}

impl FromStr for IntakeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPTY" => Ok(IntakeState::Empty),
            "VALIDATED" => Ok(IntakeState::Validated),
            "EXTRACTING" => Ok(IntakeState::Extracting),
            "READY" => Ok(IntakeState::Ready),
            "CONFIRMED" => Ok(IntakeState::Confirmed),
            _ => Err(format!("Invalid intake state: {}", s)),
        }
    }
}

impl fmt::Display for IntakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
