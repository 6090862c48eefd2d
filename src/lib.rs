use clap::ValueEnum;

pub mod footprint;
pub mod params;
pub mod runner;
pub mod schema;
pub mod script;
pub mod series;
pub mod sweep;
pub mod timing;

/// Independent variable for a projected timing series.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum Independent {
    /// Length of the first code component (`g1.n`).
    #[default]
    G1N,
    /// Dimension of the first code component (`g1.k`).
    G1K,
}

impl Independent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Independent::G1N => "g1.n",
            Independent::G1K => "g1.k",
        }
    }
}
