//! Transit network library entry points.
//!
//! This crate loads a transit dataset into an immutable [`NetworkGraph`],
//! plans same-line and single-transfer routes between named stations, and
//! computes network and station-amenity analytics. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.

pub mod amenities;
pub mod analytics;
pub mod assistant;
pub mod connections;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod loader;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use amenities::{station_profiles, Amenity, AmenityFilter, AmenityReport, StationProfile};
pub use analytics::{
    AnalyticsEngine, CentralityRow, Diameter, LineStats, NetworkInsights, NetworkSummary,
    ShortestPathTable, StationDegree,
};
pub use assistant::{answer, Intent};
pub use connections::{ConnectionFilter, ConnectionStats, ConnectionView};
pub use dataset::{default_data_dir, resolve_dataset, DatasetPaths};
pub use error::{Error, GraphLoadError, Result};
pub use graph::{build_graph, Graph};
pub use loader::{load_network, load_records};
pub use network::{
    Amenities, AmenityRecord, ConnectionRecord, LineListing, LineRecord, LineSummary,
    NetworkGraph, NetworkRecords, Station, StationPlacement, StationRecord, TransferTable,
};
pub use path::CancelToken;
pub use routing::{
    plan_route, DirectRoute, Direction, RouteOutcome, RoutePlanner, RouteRequest, TransferRoute,
};
