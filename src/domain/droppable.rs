use crate::domain::project::ListId;
use crate::domain::task::Progress;
use crate::error::TavolaError;
use std::{fmt, str::FromStr};

/// Identity of a drop target: one (list, column) cell of the board
///
/// Each list spans the three progress columns, and every cell is its own
/// drop target. The wire form is the list id and the progress digit joined
/// by a reserved separator token, e.g. `l1DIVIDER2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppableId {
    pub list_id: ListId,
    pub progress: Progress,
}

impl DroppableId {
    const SEPARATOR: &'static str = "DIVIDER";

    /// Creates a droppable id for a (list, column) cell
    pub fn new(list_id: ListId, progress: Progress) -> Self {
        Self { list_id, progress }
    }
}

impl fmt::Display for DroppableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.list_id,
            Self::SEPARATOR,
            u8::from(self.progress)
        )
    }
}

impl FromStr for DroppableId {
    type Err = TavolaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (list_part, progress_part) = s
            .split_once(Self::SEPARATOR)
            .ok_or_else(|| TavolaError::InvalidDroppableId(s.to_string()))?;

        let value: u8 = progress_part
            .parse()
            .map_err(|_| TavolaError::InvalidDroppableId(s.to_string()))?;

        Ok(Self {
            list_id: ListId::from(list_part),
            progress: Progress::try_from(value)?,
        })
    }
}
