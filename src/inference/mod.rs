// src/inference/mod.rs
pub mod dialect;
pub mod invoker;

pub use dialect::{ModelProfile, ModelRegistry, RequestDialect};
pub use invoker::{
    Completion, HttpTransport, InferenceRequest, InferenceResult, InvokerError, ModelInvoker,
    ModelTransport,
};
