/// Summary of every severity recorded under one tree node.
///
/// `min`/`max` hold `+inf`/`-inf` while `count == 0`; use [`Aggregate::summary`]
/// to get display-ready numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: u64,
}

impl Aggregate {
    pub const EMPTY: Aggregate = Aggregate {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        sum: 0.0,
        count: 0,
    };

    pub fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            sum: self.sum + other.sum,
            count: self.count + other.count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }

    /// Collapses the aggregate into (min, max, mean) with the empty sentinels
    /// replaced by zero.
    pub fn summary(&self) -> Summary {
        if self.is_empty() {
            return Summary::default();
        }

        Summary {
            min: self.min,
            max: self.max,
            mean: self.mean(),
        }
    }
}

impl Default for Aggregate {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<f64> for Aggregate {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Aggregate::EMPTY, |acc, v| acc.merge(&Aggregate::single(v)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
