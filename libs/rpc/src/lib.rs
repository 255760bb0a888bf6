//! Checked-in protobuf/gRPC bindings.
//!
//! `src/generated` is produced by prost/tonic codegen from
//! `proto/catalog/v1/catalog.proto` and checked in, so building this crate
//! needs no `protoc`. Do not edit the generated files by hand.

pub mod catalog {
    include!("generated/catalog/catalog.rs");
    include!("generated/catalog/catalog.tonic.rs");
}
