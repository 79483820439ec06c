//! The four statistics the engine can report

use crate::moments::{
    self, RunningMoments, MIN_COUNT_POPULATION, MIN_COUNT_SAMPLE,
};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Statistic computed from a context's running moments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatisticKind {
    #[serde(rename = "stddev_samp")]
    SampleStdDev,
    #[serde(rename = "stddev_pop")]
    PopulationStdDev,
    #[serde(rename = "variance_samp")]
    SampleVariance,
    #[serde(rename = "variance_pop")]
    PopulationVariance,
}

impl StatisticKind {
    pub const ALL: [StatisticKind; 4] = [
        StatisticKind::SampleStdDev,
        StatisticKind::PopulationStdDev,
        StatisticKind::SampleVariance,
        StatisticKind::PopulationVariance,
    ];

    /// Fewest observations for which the statistic is defined
    pub fn min_count(self) -> usize {
        match self {
            Self::SampleStdDev | Self::SampleVariance => MIN_COUNT_SAMPLE,
            Self::PopulationStdDev | Self::PopulationVariance => MIN_COUNT_POPULATION,
        }
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::SampleStdDev => "stddev_samp",
            Self::PopulationStdDev => "stddev_pop",
            Self::SampleVariance => "variance_samp",
            Self::PopulationVariance => "variance_pop",
        }
    }

    /// Every name the statistic is known by, canonical name first
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::SampleStdDev => &[
                "stddev_samp",
                "stddev_sample",
                "stdev_samp",
                "stdev_sample",
                "stddev",
                "stdev",
                "std_dev",
                "standard_deviation",
            ],
            Self::PopulationStdDev => &[
                "stddev_pop",
                "stddev_population",
                "stdev_pop",
                "stdev_population",
            ],
            Self::SampleVariance => &[
                "variance_samp",
                "variance_sample",
                "var_samp",
                "var_sample",
                "variance",
                "var",
            ],
            Self::PopulationVariance => &[
                "variance_pop",
                "variance_population",
                "var_pop",
                "var_population",
            ],
        }
    }

    /// Raw formula result; NaN below the minimum count
    pub fn compute(self, moments: &RunningMoments) -> f64 {
        match self {
            Self::SampleStdDev => moments::sample_stddev(moments),
            Self::PopulationStdDev => moments::population_stddev(moments),
            Self::SampleVariance => moments::sample_variance(moments),
            Self::PopulationVariance => moments::population_variance(moments),
        }
    }

    /// Statistic as reported to callers: `None` for too few observations or a
    /// non-finite result
    pub fn evaluate(self, moments: &RunningMoments) -> Option<f64> {
        if moments.count() < self.min_count() {
            return None;
        }
        moments::finite(self.compute(moments))
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for StatisticKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| Error::InvalidParameter(format!("unknown statistic: {s}")))
    }
}
