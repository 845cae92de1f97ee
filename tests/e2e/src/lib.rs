//! Browser tests against a locally served build of the `web` package.
//! They need the `dx` CLI and a Chrome install, so every test is ignored by
//! default; run them with `cargo test -p e2e -- --ignored`.

pub mod browser;
pub mod test_server;
