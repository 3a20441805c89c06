use block_compression_benchmark::benchmark_utils::init_logging;
use block_compression_benchmark::encoding::{self, Encoding};
use std::error::Error;
use tracing::info;
use uuid::Uuid;

/// Prints the size of a single UUID under each encoding, relative to binary.
fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let uuid = Uuid::new_v4();
    info!(%uuid, "sizing");

    let encodings: Vec<Encoding<Uuid>> = vec![
        encoding::uuid_binary(),
        encoding::latin1(),
        encoding::utf8(),
        encoding::utf16(),
    ];
    let binary_len = encoding::uuid_binary().encode(uuid)?.len();

    println!("Format,Size (bytes),Ratio ");
    for encoding in &encodings {
        let len = encoding.encode(uuid)?.len();
        println!("{},{},{}", encoding.name(), len, len as f64 / binary_len as f64);
    }
    Ok(())
}
