//! Synthetic graph generation for benchmarks and tests.

mod camouflage;

pub use camouflage::{
    inject_clique_camouflage, random_bipartite, CamouflageStrategy, CliqueCamoConfig,
};
