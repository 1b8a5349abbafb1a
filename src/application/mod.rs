// Application module: gRPC use cases and protobuf mapping

pub mod grpc_service;
pub mod mappers;

pub use grpc_service::FreightPlannerService;
