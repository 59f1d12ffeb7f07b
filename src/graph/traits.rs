use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Weight carried by an edge and accumulated into path distances
pub trait EdgeWeight: Copy + Ord + Debug + Zero + Send + Sync {
    /// Extends a path distance by one edge, `None` if the sum is not representable
    fn checked_extend(self, edge: Self) -> Option<Self>;

    /// Returns true if the weight is below zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Returns true if the weight is a usable finite value
    fn is_finite(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl EdgeWeight for $t {
                fn checked_extend(self, edge: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &edge)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl EdgeWeight for OrderedFloat<$t> {
                fn checked_extend(self, edge: Self) -> Option<Self> {
                    let sum = self + edge;
                    if sum.0.is_finite() { Some(sum) } else { None }
                }

                fn is_finite(&self) -> bool {
                    self.0.is_finite()
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Trait representing a read-only weighted directed graph
pub trait Graph<W>: Debug
where
    W: EdgeWeight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in ascending target order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
