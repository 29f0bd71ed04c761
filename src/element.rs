use std::fmt;

/// Anything that can be ranked by a [`PriorityHeap`](crate::PriorityHeap).
///
/// The priority must stay the same for as long as the value is stored in a
/// heap.
pub trait HasPriority {
    type Priority: Ord;

    fn priority(&self) -> Self::Priority;
}

macro_rules! impl_has_priority {
    ($($t:ty),*) => {
        $(
            impl HasPriority for $t {
                type Priority = $t;

                fn priority(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_has_priority!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<E: HasPriority + ?Sized> HasPriority for &E {
    type Priority = E::Priority;

    fn priority(&self) -> Self::Priority {
        (**self).priority()
    }
}

/// A payload tagged with an explicit priority.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Prioritized<P, V> {
    pub priority: P,
    pub value: V,
}

impl<P, V> Prioritized<P, V> {
    pub fn new(priority: P, value: V) -> Self {
        Prioritized { priority, value }
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<P: Ord + Copy, V> HasPriority for Prioritized<P, V> {
    type Priority = P;

    fn priority(&self) -> P {
        self.priority
    }
}

impl<P, V> From<(P, V)> for Prioritized<P, V> {
    fn from(pair: (P, V)) -> Self {
        Prioritized {
            priority: pair.0,
            value: pair.1,
        }
    }
}

impl<P: fmt::Display, V: fmt::Display> fmt::Display for Prioritized<P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.priority)
    }
}
