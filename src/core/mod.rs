//! Core-Domänentypen: Kategorien, Datensätze, Marker, Gruppen, Kamera, Spatial-Index, Cluster.

pub mod camera;
pub mod category;
pub mod cluster;
/// Projektion zwischen Geo- und Weltkoordinaten
pub mod geo;
pub mod group;
pub mod marker;
mod point_record;
pub mod spatial;
pub mod spider;

pub use camera::Camera2D;
pub use category::{Category, MarkerIcon};
pub use cluster::{cluster_group, convex_hull, Cluster, ClusterParams, ClusterSize};
pub use geo::GeoBounds;
pub use group::{MarkerGroup, MarkerLayers};
pub use marker::{DetailContent, Marker};
pub use point_record::PointRecord;
pub use spatial::{SpatialIndex, SpatialMatch, SpatialSlot};
pub use spider::{Spider, SpiderLeg};
