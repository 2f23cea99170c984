//! Behaviour tests spanning the arithmetic in `snet-common` and the
//! presentation engine in `snet-core`.

mod presentation;
