//! Client-side ordering of the fetched page in the admin table.

use crate::model::Thought;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    ThumbsUp,
    ThumbsDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort column plus direction. Clicking the active column flips the
/// direction; clicking another column selects it descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.field = field;
            self.direction = SortDirection::Desc;
        }
    }
}

pub fn sort_thoughts(thoughts: &mut [Thought], sort: SortState) {
    thoughts.sort_by(|a, b| {
        let ordering = match sort.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::ThumbsUp => a.thumbs_up.cmp(&b.thumbs_up),
            SortField::ThumbsDown => a.thumbs_down.cmp(&b.thumbs_down),
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
