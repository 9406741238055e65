pub mod dijkstra;
pub mod floyd_warshall;
pub mod results;

pub use dijkstra::Dijkstra;
pub use floyd_warshall::FloydWarshall;
pub use results::{AllPairsResult, SingleSourceResult};
