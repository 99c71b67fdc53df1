//! Complete weighted graph over the city set.
//!
//! [`CityGraph`] interns city names to dense indices `0..n` and owns a
//! full n×n symmetric distance matrix, built once and shared read-only
//! by every solver. Lookups are O(1); construction is O(n²) metric
//! evaluations.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::geo::{haversine_km, GeoPoint};

/// Complete weighted graph over a set of named cities.
#[derive(Debug, Clone)]
pub struct CityGraph {
    names: Vec<String>,
    coords: Vec<GeoPoint>,
    index: HashMap<String, usize>,
    /// Row-major n×n matrix; `weights[a * n + b]` is the edge weight.
    weights: Vec<f64>,
}

impl CityGraph {
    /// Builds the complete graph with Haversine edge weights.
    ///
    /// Cities keep their input order: index 0 is the first city listed,
    /// which is also the deterministic start vertex of the construction
    /// solver.
    ///
    /// # Errors
    ///
    /// `Config` when fewer than two cities are given, a name repeats,
    /// or a coordinate is outside lat ∈ [-90, 90] / lon ∈ [-180, 180].
    pub fn from_cities<S: AsRef<str>>(cities: &[(S, GeoPoint)]) -> Result<Self> {
        Self::from_cities_with(cities, haversine_km)
    }

    /// Builds the complete graph with a caller-supplied symmetric metric.
    ///
    /// Exists so tests and planar consumers can swap the great-circle
    /// distance for e.g. Euclidean degrees; everything downstream is
    /// metric-agnostic.
    pub fn from_cities_with<S, F>(cities: &[(S, GeoPoint)], metric: F) -> Result<Self>
    where
        S: AsRef<str>,
        F: Fn(GeoPoint, GeoPoint) -> f64,
    {
        let n = cities.len();
        if n < 2 {
            return Err(Error::config(format!(
                "need at least 2 cities, got {n}"
            )));
        }

        let mut names = Vec::with_capacity(n);
        let mut coords = Vec::with_capacity(n);
        let mut index = HashMap::with_capacity(n);
        for (name, coord) in cities {
            let name = name.as_ref();
            if !coord.is_valid() {
                return Err(Error::config(format!(
                    "city {name:?} has out-of-range coordinate ({}, {})",
                    coord.lat, coord.lon
                )));
            }
            if index.insert(name.to_owned(), names.len()).is_some() {
                return Err(Error::config(format!("duplicate city name {name:?}")));
            }
            names.push(name.to_owned());
            coords.push(*coord);
        }

        let mut weights = vec![0.0; n * n];
        for a in 0..n {
            for b in (a + 1)..n {
                let w = metric(coords[a], coords[b]);
                weights[a * n + b] = w;
                weights[b * n + a] = w;
            }
        }

        Ok(Self {
            names,
            coords,
            index,
            weights,
        })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: construction rejects empty city sets.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, v: usize) -> &str {
        &self.names[v]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn coord(&self, v: usize) -> GeoPoint {
        self.coords[v]
    }

    /// Resolves a city name to its dense index.
    ///
    /// # Errors
    /// `NotFound` when the name is not in the graph.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::not_found(format!("city {name:?}")))
    }

    /// Edge weight between two vertices by index.
    ///
    /// # Panics
    /// Panics on out-of-range indices; name-keyed lookups go through
    /// [`distance_between`](Self::distance_between) instead.
    pub fn weight(&self, a: usize, b: usize) -> f64 {
        self.weights[a * self.len() + b]
    }

    /// Edge weight between two cities by name.
    ///
    /// # Errors
    /// `NotFound` when either city is unknown.
    pub fn distance_between(&self, a: &str, b: &str) -> Result<f64> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.weight(a, b))
    }

    /// All edges incident to `v`, as `(neighbor, weight)` pairs.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let n = self.len();
        (0..n).filter(move |&u| u != v).map(move |u| (u, self.weight(v, u)))
    }

    /// Induced subgraph view over a vertex subset.
    ///
    /// Used to restrict matching to the odd-degree spanning-tree
    /// vertices; no weights are copied.
    pub fn induced(&self, vertices: &[usize]) -> SubGraph<'_> {
        debug_assert!(vertices.iter().all(|&v| v < self.len()));
        SubGraph {
            graph: self,
            vertices: vertices.to_vec(),
        }
    }
}

/// A view of [`CityGraph`] restricted to a vertex subset.
///
/// Local indices `0..len` map back to parent indices via
/// [`vertex`](Self::vertex); weights are read through to the parent.
#[derive(Debug, Clone)]
pub struct SubGraph<'g> {
    graph: &'g CityGraph,
    vertices: Vec<usize>,
}

impl SubGraph<'_> {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Parent-graph index of local vertex `local`.
    pub fn vertex(&self, local: usize) -> usize {
        self.vertices[local]
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Weight between two local vertices, read from the parent graph.
    pub fn weight(&self, a: usize, b: usize) -> f64 {
        self.graph.weight(self.vertices[a], self.vertices[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<(&'static str, GeoPoint)> {
        vec![
            ("A", GeoPoint::new(0.0, 0.0)),
            ("B", GeoPoint::new(0.0, 1.0)),
            ("C", GeoPoint::new(1.0, 1.0)),
            ("D", GeoPoint::new(1.0, 0.0)),
        ]
    }

    fn euclidean(a: GeoPoint, b: GeoPoint) -> f64 {
        (a.lat - b.lat).hypot(a.lon - b.lon)
    }

    #[test]
    fn test_too_few_cities() {
        let cities = [("A", GeoPoint::new(0.0, 0.0))];
        assert!(matches!(
            CityGraph::from_cities(&cities),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_duplicate_name() {
        let cities = [
            ("A", GeoPoint::new(0.0, 0.0)),
            ("A", GeoPoint::new(1.0, 1.0)),
        ];
        assert!(matches!(
            CityGraph::from_cities(&cities),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_invalid_coordinate() {
        let cities = [
            ("A", GeoPoint::new(95.0, 0.0)),
            ("B", GeoPoint::new(0.0, 0.0)),
        ];
        assert!(matches!(
            CityGraph::from_cities(&cities),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_weights_symmetric_and_zero_diagonal() {
        let graph = CityGraph::from_cities(&square()).unwrap();
        for a in 0..graph.len() {
            assert_eq!(graph.weight(a, a), 0.0);
            for b in 0..graph.len() {
                assert_eq!(graph.weight(a, b), graph.weight(b, a));
            }
        }
    }

    #[test]
    fn test_name_lookup() {
        let graph = CityGraph::from_cities(&square()).unwrap();
        assert_eq!(graph.index_of("A").unwrap(), 0);
        assert_eq!(graph.index_of("D").unwrap(), 3);
        assert_eq!(graph.name(3), "D");
        assert_eq!(graph.coord(3), GeoPoint::new(1.0, 0.0));
        assert_eq!(graph.names().count(), 4);
        assert!(matches!(
            graph.index_of("Atlantis"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            graph.distance_between("A", "Atlantis"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_neighbors_enumerates_all_others() {
        let graph = CityGraph::from_cities(&square()).unwrap();
        let neighbors: Vec<usize> = graph.neighbors(2).map(|(u, _)| u).collect();
        assert_eq!(neighbors, vec![0, 1, 3]);
    }

    #[test]
    fn test_metric_injection() {
        let graph = CityGraph::from_cities_with(&square(), euclidean).unwrap();
        assert!((graph.distance_between("A", "B").unwrap() - 1.0).abs() < 1e-12);
        assert!((graph.distance_between("A", "C").unwrap() - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_induced_subgraph_reads_parent_weights() {
        let graph = CityGraph::from_cities_with(&square(), euclidean).unwrap();
        let sub = graph.induced(&[1, 3]);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.vertex(0), 1);
        assert_eq!(sub.vertex(1), 3);
        assert!((sub.weight(0, 1) - 2f64.sqrt()).abs() < 1e-12);
    }
}
