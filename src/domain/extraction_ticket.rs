/// Identifies one extraction request within a widget instance.
///
/// Tickets are issued in strictly increasing order, so a result carrying a
/// ticket older than the current one belongs to a superseded selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtractionTicket(u64);

impl ExtractionTicket {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}
