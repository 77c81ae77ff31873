use embodied_core_api::{Flow, FlowBucket};
use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, Index};

/// One value per embodied flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowValues {
    pub energy: f64,
    pub water: f64,
    pub ghg: f64,
}

impl FlowValues {
    pub fn get(&self, flow: Flow) -> f64 {
        match flow {
            Flow::Energy => self.energy,
            Flow::Water => self.water,
            Flow::Ghg => self.ghg,
        }
    }

    pub fn set(&mut self, flow: Flow, value: f64) {
        match flow {
            Flow::Energy => self.energy = value,
            Flow::Water => self.water = value,
            Flow::Ghg => self.ghg = value,
        }
    }

    /// Builds the values by evaluating `f` once per flow
    pub fn from_fn(mut f: impl FnMut(Flow) -> f64) -> Self {
        let mut values = FlowValues::default();
        for flow in Flow::ALL {
            values.set(flow, f(flow));
        }
        values
    }

    pub fn sum(&self, other: &FlowValues) -> FlowValues {
        FlowValues::from_fn(|flow| self.get(flow) + other.get(flow))
    }

    pub fn difference(&self, other: &FlowValues) -> FlowValues {
        FlowValues::from_fn(|flow| self.get(flow) - other.get(flow))
    }
}

impl Index<Flow> for FlowValues {
    type Output = f64;

    fn index(&self, flow: Flow) -> &f64 {
        match flow {
            Flow::Energy => &self.energy,
            Flow::Water => &self.water,
            Flow::Ghg => &self.ghg,
        }
    }
}

impl AddAssign<&FlowValues> for FlowValues {
    fn add_assign(&mut self, other: &FlowValues) {
        self.energy += other.energy;
        self.water += other.water;
        self.ghg += other.ghg;
    }
}

/// Flow totals with exactly six buckets.
///
/// `life_cycle` and `life_cycle_wastage` are always derived from the initial and
/// recurrent buckets, never computed on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowTotals {
    pub initial: FlowValues,
    pub initial_wastage: FlowValues,
    pub recurrent: FlowValues,
    pub recurrent_wastage: FlowValues,
    pub life_cycle: FlowValues,
    pub life_cycle_wastage: FlowValues,
}

impl FlowTotals {
    /// Builds totals from the four computed buckets and derives the life cycle buckets
    pub fn from_parts(
        initial: FlowValues,
        initial_wastage: FlowValues,
        recurrent: FlowValues,
        recurrent_wastage: FlowValues,
    ) -> Self {
        Self {
            life_cycle: initial.sum(&recurrent),
            life_cycle_wastage: initial_wastage.sum(&recurrent_wastage),
            initial,
            initial_wastage,
            recurrent,
            recurrent_wastage,
        }
    }

    pub fn bucket(&self, bucket: FlowBucket) -> &FlowValues {
        match bucket {
            FlowBucket::Initial => &self.initial,
            FlowBucket::InitialWastage => &self.initial_wastage,
            FlowBucket::Recurrent => &self.recurrent,
            FlowBucket::RecurrentWastage => &self.recurrent_wastage,
            FlowBucket::LifeCycle => &self.life_cycle,
            FlowBucket::LifeCycleWastage => &self.life_cycle_wastage,
        }
    }

    pub fn value(&self, bucket: FlowBucket, flow: Flow) -> f64 {
        self.bucket(bucket).get(flow)
    }

    /// Elementwise sum of every bucket
    pub fn merge(&mut self, other: &FlowTotals) {
        self.initial += &other.initial;
        self.initial_wastage += &other.initial_wastage;
        self.recurrent += &other.recurrent;
        self.recurrent_wastage += &other.recurrent_wastage;
        self.life_cycle += &other.life_cycle;
        self.life_cycle_wastage += &other.life_cycle_wastage;
    }

    pub fn initial_excluding_wastage(&self) -> FlowValues {
        self.initial.difference(&self.initial_wastage)
    }

    pub fn recurrent_excluding_wastage(&self) -> FlowValues {
        self.recurrent.difference(&self.recurrent_wastage)
    }
}
