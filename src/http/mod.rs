//! HTTP transport seam and the per-task request performer.
mod performer;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use performer::RequestPerformer;
pub use transport::{ReqwestTransport, ResponseBody, Transport};
