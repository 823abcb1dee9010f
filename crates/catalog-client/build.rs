fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile the shared hipstershop schema (client and server stubs)
    tonic_build::compile_protos("../../proto/demo.proto")?;
    Ok(())
}
