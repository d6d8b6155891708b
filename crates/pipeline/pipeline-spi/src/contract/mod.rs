//! Step contract.

mod step;

pub use step::PipelineStep;
