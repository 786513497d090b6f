//! Generated protobuf/gRPC types for the shortlink wire contract.

pub mod shortlink {
    pub mod v1 {
        tonic::include_proto!("shortlink.v1");
    }
}

pub mod v1 {
    pub use crate::shortlink::v1::*;
}
