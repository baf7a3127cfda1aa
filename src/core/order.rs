use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub type Comparator<T> = fn(&T, &T) -> Ordering;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl From<&str> for OrderDirection {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            OrderDirection::Desc
        } else {
            OrderDirection::Asc
        }
    }
}

impl Display for OrderDirection {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "asc"),
            OrderDirection::Desc => write!(f, "desc"),
        }
    }
}

// OrderDto carries the caller's sort request, e.g. {"orderBy": "title", "direction": "desc"}
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[serde(default)]
    pub order_by: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

impl OrderDto {
    pub fn new(order_by: &str, direction: &str) -> Self {
        Self {
            order_by: Some(order_by.to_string()),
            direction: Some(direction.to_string()),
        }
    }

    pub fn direction(&self) -> OrderDirection {
        self.direction.as_deref().map(OrderDirection::from).unwrap_or(OrderDirection::Asc)
    }
}

/// Types that can be ordered by a caller-supplied field name.
pub trait Sortable: Sized {
    /// Ascending comparator for `field`, or None when the field is not sortable.
    fn comparator(field: &str) -> Option<Comparator<Self>>;
}

/// Sorts `items` as requested by `order`. Unknown or missing fields keep the
/// incoming order. The sort is stable in both directions.
pub fn apply_order<T: Sortable>(mut items: Vec<T>, order: &OrderDto) -> Vec<T> {
    let compare = match order.order_by.as_deref().and_then(T::comparator) {
        Some(compare) => compare,
        None => return items,
    };
    match order.direction() {
        OrderDirection::Asc => items.sort_by(compare),
        OrderDirection::Desc => items.sort_by(|a, b| compare(b, a)),
    }
    items
}
