fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Proto codegen is only needed by the gRPC surface; the plain library
    // build must work without protoc installed.
    if std::env::var_os("CARGO_FEATURE_SERVER").is_some() {
        tonic_build::compile_protos("proto/freight_plan.proto")?;
    }
    println!("cargo:rerun-if-changed=proto/freight_plan.proto");
    Ok(())
}
