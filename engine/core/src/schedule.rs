//! Release Scheduling
//!
//! Orders characters into release groups. A group is an ordered batch of
//! characters that become active together; groups are consumed strictly in
//! order by the lifecycle bookkeeping. The policy is a tagged variant, not
//! a trait hierarchy: each effect names its policy and its parameters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;
use crate::geometry::Coord;
use crate::stage::{CharacterId, Stage};

/// An ordered batch of characters sharing one activation trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Member characters, in stable reading order
    pub members: Vec<CharacterId>,
}

impl Group {
    /// Create a group from its members
    #[must_use]
    pub fn new(members: Vec<CharacterId>) -> Self {
        Self { members }
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The eight directional traversal orders.
///
/// Each defines a strict total order over characters: a grouping key
/// (column, row, or diagonal index) swept in the stated direction, with
/// ties inside a group broken by reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// One group per column, leftmost first
    ColumnLeftToRight,
    /// One group per column, rightmost first
    ColumnRightToLeft,
    /// One group per row, topmost first
    RowTopToBottom,
    /// One group per row, bottom line first
    RowBottomToTop,
    /// One group per anti-diagonal, starting at the top-left corner
    DiagonalTopLeftToBottomRight,
    /// One group per diagonal, starting at the bottom-left corner
    DiagonalBottomLeftToTopRight,
    /// One group per diagonal, starting at the top-right corner
    DiagonalTopRightToBottomLeft,
    /// One group per anti-diagonal, starting at the bottom-right corner
    DiagonalBottomRightToTopLeft,
}

impl TraversalOrder {
    /// All traversal orders, for iteration in demos and tests
    pub const ALL: [TraversalOrder; 8] = [
        TraversalOrder::ColumnLeftToRight,
        TraversalOrder::ColumnRightToLeft,
        TraversalOrder::RowTopToBottom,
        TraversalOrder::RowBottomToTop,
        TraversalOrder::DiagonalTopLeftToBottomRight,
        TraversalOrder::DiagonalBottomLeftToTopRight,
        TraversalOrder::DiagonalTopRightToBottomLeft,
        TraversalOrder::DiagonalBottomRightToTopLeft,
    ];

    /// Grouping key for a coordinate. Groups are emitted in ascending key
    /// order, so descending sweeps negate the key.
    fn key(self, coord: Coord) -> i32 {
        let col = i32::from(coord.column);
        let row = i32::from(coord.row);
        match self {
            Self::ColumnLeftToRight => col,
            Self::ColumnRightToLeft => -col,
            // Row 0 is the bottom line, so "top to bottom" descends rows.
            Self::RowTopToBottom => -row,
            Self::RowBottomToTop => row,
            Self::DiagonalTopLeftToBottomRight => col - row,
            Self::DiagonalBottomRightToTopLeft => -(col - row),
            Self::DiagonalBottomLeftToTopRight => col + row,
            Self::DiagonalTopRightToBottomLeft => -(col + row),
        }
    }

    /// Partition characters into groups along this traversal order.
    ///
    /// Deterministic: identical input always yields identical groups, and
    /// members inside each group keep reading order (top line first, then
    /// left to right).
    #[must_use]
    pub fn partition(self, characters: &[(CharacterId, Coord)]) -> Vec<Group> {
        let mut ordered: Vec<(CharacterId, Coord)> = characters.to_vec();
        // Reading order first so within-group order is stable.
        ordered.sort_by_key(|(id, coord)| (std::cmp::Reverse(coord.row), coord.column, *id));

        let mut groups: std::collections::BTreeMap<i32, Vec<CharacterId>> =
            std::collections::BTreeMap::new();
        for (id, coord) in ordered {
            groups.entry(self.key(coord)).or_default().push(id);
        }
        groups.into_values().map(Group::new).collect()
    }
}

impl FromStr for TraversalOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "column_left_to_right" => Ok(Self::ColumnLeftToRight),
            "column_right_to_left" => Ok(Self::ColumnRightToLeft),
            "row_top_to_bottom" => Ok(Self::RowTopToBottom),
            "row_bottom_to_top" => Ok(Self::RowBottomToTop),
            "diagonal_top_left_to_bottom_right" => Ok(Self::DiagonalTopLeftToBottomRight),
            "diagonal_bottom_left_to_top_right" => Ok(Self::DiagonalBottomLeftToTopRight),
            "diagonal_top_right_to_bottom_left" => Ok(Self::DiagonalTopRightToBottomLeft),
            "diagonal_bottom_right_to_top_left" => Ok(Self::DiagonalBottomRightToTopLeft),
            other => Err(ConfigError::UnknownTraversal(other.to_string())),
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ColumnLeftToRight => "column_left_to_right",
            Self::ColumnRightToLeft => "column_right_to_left",
            Self::RowTopToBottom => "row_top_to_bottom",
            Self::RowBottomToTop => "row_bottom_to_top",
            Self::DiagonalTopLeftToBottomRight => "diagonal_top_left_to_bottom_right",
            Self::DiagonalBottomLeftToTopRight => "diagonal_bottom_left_to_top_right",
            Self::DiagonalTopRightToBottomLeft => "diagonal_top_right_to_bottom_left",
            Self::DiagonalBottomRightToTopLeft => "diagonal_bottom_right_to_top_left",
        };
        f.write_str(name)
    }
}

/// How characters are batched into release groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SchedulePolicy {
    /// Everything in one group, released together at tick 0
    SingleGroup,
    /// One group per column/row/diagonal, swept in a direction
    Traversal {
        /// Sweep direction
        order: TraversalOrder,
        /// Ticks to wait between group releases (0 = one group per tick)
        #[serde(default)]
        stagger_delay: u32,
    },
    /// Fixed-size chunks in reading order (firework shells)
    Chunked {
        /// Characters per chunk; the final chunk may be smaller
        chunk_size: usize,
        /// Ticks to wait between group releases
        #[serde(default)]
        stagger_delay: u32,
    },
}

impl SchedulePolicy {
    /// The configured delay between group releases (0 for single-group)
    #[must_use]
    pub fn stagger_delay(&self) -> u32 {
        match self {
            Self::SingleGroup => 0,
            Self::Traversal { stagger_delay, .. } | Self::Chunked { stagger_delay, .. } => {
                *stagger_delay
            }
        }
    }

    /// Validate policy parameters.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroChunkSize`] for a chunked policy with empty chunks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Chunked { chunk_size: 0, .. } => Err(ConfigError::ZeroChunkSize),
            _ => Ok(()),
        }
    }

    /// Build the ordered release groups for this policy.
    ///
    /// An empty character collection yields zero groups regardless of
    /// policy, and the run then completes immediately after preparation.
    ///
    /// # Errors
    ///
    /// Propagates [`SchedulePolicy::validate`] failures.
    pub fn build_groups<S: Stage + ?Sized>(&self, stage: &S) -> Result<Vec<Group>, ConfigError> {
        self.validate()?;
        let characters = stage.characters();
        if characters.is_empty() {
            return Ok(Vec::new());
        }
        let groups = match self {
            Self::SingleGroup => vec![Group::new(characters)],
            Self::Traversal { order, .. } => stage.grouped_by(*order),
            Self::Chunked { chunk_size, .. } => characters
                .chunks(*chunk_size)
                .map(|chunk| Group::new(chunk.to_vec()))
                .collect(),
        };
        tracing::debug!(
            policy = ?self,
            groups = groups.len(),
            "built release schedule"
        );
        Ok(groups)
    }
}
