//! Serde representation of a [`DenseGraph`].
//!
//! Infinity has no portable textual form, so absent edges are written as
//! `null`. Edges whose cost is not finite are written as the strings
//! `"-inf"` or `"nan"`:
//!
//! ```json
//! { "node_count": 2, "costs": [null, 1.5, "-inf", null] }
//! ```

use num_traits::Float;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{is_edge, DenseGraph};
use crate::graph::error::GraphError;

#[derive(Serialize)]
#[serde(bound(serialize = "C: Float + Serialize"))]
struct SnapshotRef<'a, C> {
    node_count: usize,
    #[serde(serialize_with = "serialize_costs")]
    costs: &'a [C],
}

#[derive(Deserialize)]
struct Snapshot<C> {
    node_count: usize,
    costs: Vec<Option<Cell<C>>>,
}

/// One present edge cost.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Cell<C> {
    Finite(C),
    NonFinite(NonFinite),
}

#[derive(Clone, Copy, Serialize, Deserialize)]
enum NonFinite {
    #[serde(rename = "-inf")]
    NegInfinity,
    #[serde(rename = "nan")]
    Nan,
}

impl<C: Float> Cell<C> {
    /// `None` for an absent edge.
    fn encode(cost: C) -> Option<Self> {
        if !is_edge(cost) {
            None
        } else if cost.is_nan() {
            Some(Cell::NonFinite(NonFinite::Nan))
        } else if cost.is_infinite() {
            Some(Cell::NonFinite(NonFinite::NegInfinity))
        } else {
            Some(Cell::Finite(cost))
        }
    }

    fn decode(cell: Option<Self>) -> C {
        match cell {
            None => C::infinity(),
            Some(Cell::Finite(cost)) => cost,
            Some(Cell::NonFinite(NonFinite::NegInfinity)) => C::neg_infinity(),
            Some(Cell::NonFinite(NonFinite::Nan)) => C::nan(),
        }
    }
}

fn serialize_costs<S, C>(costs: &&[C], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    C: Float + Serialize,
{
    serializer.collect_seq(costs.iter().map(|&c| Cell::encode(c)))
}

impl<C: Float> Snapshot<C> {
    fn into_graph(self) -> Result<DenseGraph<C>, GraphError> {
        let costs = self.costs.into_iter().map(Cell::decode).collect();
        DenseGraph::from_costs(self.node_count, costs)
    }
}

impl<C: Float + Serialize> Serialize for DenseGraph<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SnapshotRef {
            node_count: self.node_count,
            costs: &self.costs,
        }
        .serialize(serializer)
    }
}

impl<'de, C: Float + Deserialize<'de>> Deserialize<'de> for DenseGraph<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = Snapshot::<C>::deserialize(deserializer)?;
        snapshot.into_graph().map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(%err, "rejected dense graph snapshot");
            serde::de::Error::custom(err)
        })
    }
}
