/// Builds the gRPC client and server code for the `category.proto` definition
/// using `tonic-prost-build`.
///
/// Alongside the generated modules, a serialized `FileDescriptorSet` is written
/// to `OUT_DIR/category_descriptor.bin`. The server registers it with
/// `tonic-reflection` so tools like `grpcurl` can discover the API without a
/// local copy of the proto file.
///
/// # Files and Paths
///
/// - Proto file: `proto/category.proto`
/// - Includes: `proto/`
///
/// # Output
///
/// Generated code is exposed as:
///
/// ```rust
/// pub mod proto {
///     tonic::include_proto!("category");
/// }
/// ```
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let descriptor_path = out_dir.join("category_descriptor.bin");

    tonic_prost_build::configure()
        .file_descriptor_set_path(&descriptor_path)
        .compile_protos(&["proto/category.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/category.proto");
    Ok(())
}
