use async_trait::async_trait;
use crate::error::Result;

/// A scorer that can be driven uniformly by an orchestrator.
///
/// Implementations are pure computations; the async signature only lets
/// callers mix them with I/O-bound metric families.
#[async_trait]
pub trait MetricCalculator {
    type Input;
    type Output;

    async fn calculate(&self, input: Self::Input) -> Result<Self::Output>;
}
