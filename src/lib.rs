/// Cartfeed - encrypted commerce datafeed decoding
///
/// This is the root crate that provides workspace-level documentation.
/// Actual implementation is in the subcrates:
/// - `cartfeed-core`: Stream cipher and feed decoder
/// - `cartfeed-receiver`: HTTP endpoint receiving and capturing datafeeds
/// - `cartfeed-client`: Client for the outbound vendor API

/// Returns the version of the package.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
